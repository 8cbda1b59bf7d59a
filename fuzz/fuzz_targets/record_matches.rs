#![no_main]

extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate rs_league;

use rs_league::core::{CompetitorId, LeagueError};
use rs_league::standings::{
    test_util::{assert_valid_matrix, assert_valid_standings},
    MatchMatrix, RandomResultsGenerator, Standings,
};

use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
enum Op {
    Record {
        a: u8,
        b: u8,
        score_for: u8,
        score_against: u8,
    },
    Clear {
        a: CompetitorId,
        b: CompetitorId,
    },
}

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub size: u8,
    pub target_wins: u8,
    pub completion: u8,
    pub seed: u64,
    pub ops: Vec<Op>,
}

/// Mostly on the roster, with 0 and `size + 1` left over to hit the
/// unknown id path.
fn roster_id(raw: u8, size: usize) -> CompetitorId {
    CompetitorId::new(raw as u32 % (size as u32 + 2))
}

fuzz_target!(|input: Input| {
    let size = 2 + (input.size % 15) as usize;
    let target_wins = 1 + (input.target_wins % 7) as u32;
    let names: Vec<String> = (0..size).map(|i| format!("P{}", i + 1)).collect();
    let mut matrix = MatchMatrix::from_names(names, target_wins).unwrap();

    RandomResultsGenerator::with_seed(input.completion as f64 / 255.0, input.seed)
        .fill(&mut matrix);

    for op in input.ops {
        let result = match op {
            Op::Record {
                a,
                b,
                score_for,
                score_against,
            } => matrix.record_match(
                roster_id(a, size),
                roster_id(b, size),
                score_for as u32,
                score_against as u32,
            ),
            Op::Clear { a, b } => matrix.clear_match(a, b),
        };
        match result {
            Ok(()) => {}
            Err(LeagueError::SelfMatch(_)) | Err(LeagueError::UnknownCompetitor(_)) => {}
            Err(e) => panic!("Unexpected error: {e}"),
        }
        assert_valid_matrix(&matrix);
    }

    let standings = Standings::compute(&matrix);
    assert_valid_standings(&matrix, &standings);
    assert_eq!(standings, Standings::compute(&matrix));
});
