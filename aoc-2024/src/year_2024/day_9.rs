use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::trace;

const EXAMPLE: &str = "2333133121414131402";

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 9, example = EXAMPLE, tags = ["compaction"])]
pub struct Solver;

/// Contiguous run of blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    len: usize,
}

/// Disk map: file `i` is `files[i]`, free runs in disk order
#[derive(Debug, Clone, Default)]
pub struct DiskMap {
    files: Vec<Span>,
    free: Vec<Span>,
    size: usize,
}

impl DiskMap {
    fn blocks(&self) -> Vec<Option<usize>> {
        let mut blocks = vec![None; self.size];
        for (id, span) in self.files.iter().enumerate() {
            blocks[span.start..span.start + span.len].fill(Some(id));
        }
        blocks
    }
}

fn render(blocks: &[Option<usize>]) -> String {
    blocks
        .iter()
        .map(|block| match block {
            Some(id) => char::from(b'0' + (id % 10) as u8),
            None => '.',
        })
        .collect()
}

fn checksum(blocks: &[Option<usize>]) -> u64 {
    blocks
        .iter()
        .enumerate()
        .filter_map(|(pos, block)| block.map(|id| pos as u64 * id as u64))
        .sum()
}

/// Move single blocks from the end into the leftmost gap until no gap is left of a file block
fn compact_blocks(blocks: &mut [Option<usize>]) {
    if blocks.is_empty() {
        return;
    }
    let (mut left, mut right) = (0, blocks.len() - 1);
    while left < right {
        match (blocks[left], blocks[right]) {
            (Some(_), _) => left += 1,
            (None, None) => right -= 1,
            (None, Some(_)) => {
                blocks.swap(left, right);
                left += 1;
                right -= 1;
            }
        }
    }
}

/// Move whole files, highest id first, into the leftmost free run that fits
fn compact_files(disk: &mut DiskMap) {
    for file in disk.files.iter_mut().rev() {
        let Some(gap) = disk
            .free
            .iter_mut()
            .take_while(|gap| gap.start < file.start)
            .find(|gap| gap.len >= file.len)
        else {
            continue;
        };
        file.start = gap.start;
        gap.start += file.len;
        gap.len -= file.len;
    }
}

impl AocParser for Solver {
    type SharedData<'a> = DiskMap;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let digits = input.trim();
        if digits.is_empty() {
            return Err(ParseError::MissingData("disk map is empty".into()));
        }

        let mut disk = DiskMap::default();
        for (i, c) in digits.chars().enumerate() {
            let len = c.to_digit(10).ok_or_else(|| {
                ParseError::InvalidFormat(format!("(column {}) expected a digit, found {:?}", i + 1, c))
            })? as usize;
            let span = Span { start: disk.size, len };
            if i % 2 == 0 {
                disk.files.push(span);
            } else if len > 0 {
                disk.free.push(span);
            }
            disk.size += len;
        }
        Ok(disk)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut blocks = shared.blocks();
        trace!("disk before compaction: {}", render(&blocks));
        compact_blocks(&mut blocks);
        trace!("disk after compaction:  {}", render(&blocks));
        Ok(checksum(&blocks).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut disk = shared.clone();
        compact_files(&mut disk);
        let blocks = disk.blocks();
        trace!("disk after file moves: {}", render(&blocks));
        Ok(checksum(&blocks).to_string())
    }
}
