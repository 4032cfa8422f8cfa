//! Grid building and navigation benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use crossword::clue::{ClueDefinition, Direction, number_clues};
use crossword::focus::{advance_target, secondarily_focused_cells};
use crossword::grid::build_cells;
use crossword::{CrosswordOptions, KeyEvent, Puzzle};
use crossword_rust as crossword;
use std::hint::black_box;

/// A lattice of crossing words: across words on even rows, down words on
/// even columns, every word `size` letters long.
fn lattice(size: u32) -> Vec<ClueDefinition> {
    let word: String = (0..size).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
    let mut clues = Vec::new();
    for line in (0..size).step_by(2) {
        clues.push(ClueDefinition::new("row", &word, Direction::Across, 0, line));
        clues.push(ClueDefinition::new("column", &word, Direction::Down, line, 0));
    }
    clues
}

fn numbering(c: &mut Criterion) {
    let mut group = c.benchmark_group("number_clues");
    for size in [15, 41] {
        let clues = lattice(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &clues, |b, clues| {
            b.iter(|| number_clues(black_box(clues)));
        });
    }
    group.finish();
}

fn cell_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_cells");
    for size in [15, 41] {
        let numbered = number_clues(&lattice(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &numbered, |b, numbered| {
            b.iter(|| build_cells(black_box(numbered)));
        });
    }
    group.finish();
}

fn navigation(c: &mut Criterion) {
    let cells = build_cells(&number_clues(&lattice(41)));
    let middle = cells.len() / 2;

    c.bench_function("secondary_focus_41", |b| {
        b.iter(|| secondarily_focused_cells(black_box(&cells), &cells[middle], Direction::Across));
    });

    c.bench_function("advance_target_41", |b| {
        b.iter(|| advance_target(black_box(&cells), middle, Direction::Down, 1, false));
    });
}

fn typing(c: &mut Criterion) {
    let clues = lattice(15);
    c.bench_function("type_word_15", |b| {
        b.iter(|| {
            let mut puzzle = Puzzle::new(&clues, CrosswordOptions::default());
            for ch in "abcdefghijklmno".chars() {
                puzzle.handle_key(KeyEvent::char(ch));
            }
            black_box(puzzle.percent_correct())
        });
    });
}

criterion_group!(benches, numbering, cell_building, navigation, typing);
criterion_main!(benches);
