use super::*;
use crate::error::{ArrangeError, ErrorKind};
use crate::random::SeededRandom;
use crate::test_utils::ScriptedRandom;

#[test]
fn test_sequential_fixed_size_with_short_tail() {
    let mut rng = SeededRandom::new(1);
    let items: Vec<u32> = (1..=10).collect();

    let chunks = sequential_chunk(&mut rng, &items, 3, None).unwrap();
    let expected: Vec<&[u32]> = vec![&[1, 2, 3][..], &[4, 5, 6][..], &[7, 8, 9][..], &[10][..]];
    assert_eq!(chunks, expected);
}

#[test]
fn test_sequential_exact_multiple() {
    let mut rng = SeededRandom::new(2);
    let items: Vec<u32> = (1..=6).collect();

    let chunks = sequential_chunk(&mut rng, &items, 2, None).unwrap();
    assert_eq!(chunks.len(), 3);
    assert!(chunks.iter().all(|chunk| chunk.len() == 2));
}

#[test]
fn test_sequential_empty_input() {
    let mut rng = SeededRandom::new(3);
    let items: Vec<u32> = Vec::new();

    let chunks = sequential_chunk(&mut rng, &items, 3, None).unwrap();
    assert!(chunks.is_empty());
}

#[test]
fn test_sequential_chunk_larger_than_input() {
    let mut rng = SeededRandom::new(4);
    let items = vec!["a", "b"];

    let chunks = sequential_chunk(&mut rng, &items, 5, None).unwrap();
    assert_eq!(chunks, vec![&["a", "b"][..]]);
}

#[test]
fn test_sequential_fixed_size_draws_nothing() {
    let mut rng = ScriptedRandom::new(&[0.5]);
    let items: Vec<u32> = (0..4).collect();

    sequential_chunk(&mut rng, &items, 2, None).unwrap();
    assert_eq!(rng.consumed(), 0);
}

#[test]
fn test_sequential_random_size_drawn_once() {
    // 0.5 over 2..=4 picks 3
    let mut rng = ScriptedRandom::new(&[0.5, 0.0]);
    let items: Vec<u32> = (1..=8).collect();

    let chunks = sequential_chunk(&mut rng, &items, 2, Some(4)).unwrap();
    let expected: Vec<&[u32]> = vec![&[1, 2, 3][..], &[4, 5, 6][..], &[7, 8][..]];
    assert_eq!(chunks, expected);
    assert_eq!(rng.consumed(), 1);
}

#[test]
fn test_sequential_random_size_within_bounds() {
    let mut rng = SeededRandom::new(5);
    let items: Vec<u32> = (0..50).collect();

    for _ in 0..50 {
        let chunks = sequential_chunk(&mut rng, &items, 3, Some(7)).unwrap();
        let size = chunks[0].len();
        assert!((3..=7).contains(&size));
        assert!(chunks[..chunks.len() - 1].iter().all(|chunk| chunk.len() == size));
        assert!(chunks.last().unwrap().len() <= size);
        assert_eq!(chunks.concat(), items);
    }
}

#[test]
fn test_sequential_rejects_zero_size() {
    let mut rng = SeededRandom::new(6);
    let items = vec![1, 2, 3];

    let err = sequential_chunk(&mut rng, &items, 0, None).unwrap_err();
    assert_eq!(err, ArrangeError::ZeroChunkSize);
    assert_eq!(err.kind(), ErrorKind::Range);
    assert!(sequential_chunk(&mut rng, &items, 0, Some(3)).is_err());
}

#[test]
fn test_sequential_rejects_inverted_bounds() {
    let mut rng = SeededRandom::new(7);
    let items = vec![1, 2, 3];

    let err = sequential_chunk(&mut rng, &items, 4, Some(2)).unwrap_err();
    assert!(matches!(err, ArrangeError::InvertedBounds { .. }));
}

#[test]
fn test_chunk_size() {
    let mut rng = ScriptedRandom::new(&[0.99]);
    assert_eq!(chunk_size(&mut rng, 4, None).unwrap(), 4);
    assert_eq!(chunk_size(&mut rng, 1, Some(3)).unwrap(), 3);
}
