//! Built-in puzzle catalogue. These six quests make the app useful even
//! without external config or a Gemini key.

use crate::domain::{Puzzle, PuzzleSource};

pub fn seed_puzzles() -> Vec<Puzzle> {
  vec![
    Puzzle {
      id: "p1".into(),
      title: "The Palindromic Labyrinth".into(),
      category: "Arrays & Strings".into(),
      difficulty: "Medium".into(),
      source: PuzzleSource::Seed,
      description: "You are given a labyrinth represented as a string of characters. Each character represents a room, and rooms are connected in a circular manner. Your task is to find the length of the longest palindromic subsequence that can be formed by traversing the labyrinth.\n\nInput: A string S representing the labyrinth (1 <= |S| <= 1000)\nOutput: An integer representing the length of the longest palindromic subsequence\n\nExample:\nInput: \"AABCBA\"\nOutput: 5\nExplanation: The longest palindromic subsequence is \"ABCBA\", which has a length of 5.".into(),
      hint: "Consider using dynamic programming. Create a 2D array to store the lengths of palindromic subsequences for different substrings, build up from smaller subproblems to larger ones, and handle the circular nature of the labyrinth by considering all possible starting points.".into(),
    },
    Puzzle {
      id: "p2".into(),
      title: "Binary Tree's Hidden Treasure".into(),
      category: "Trees & Graphs".into(),
      difficulty: "Hard".into(),
      source: PuzzleSource::Seed,
      description: "A binary tree hides a treasure on the path with the greatest sum of node values. The path may start and end at any node, but it must go downward through parent-child connections without revisiting a node. Find the maximum path sum.\n\nInput: The root of a binary tree with integer node values (-1000 <= value <= 1000, up to 10^4 nodes)\nOutput: An integer, the maximum path sum\n\nExample:\nInput: [-10, 9, 20, null, null, 15, 7]\nOutput: 42\nExplanation: The path 15 -> 20 -> 7 sums to 42.".into(),
      hint: "Walk the tree bottom-up. For every node compute the best downward gain from each child, clamping negative gains to zero, and track the best through-node sum seen so far.".into(),
    },
    Puzzle {
      id: "p3".into(),
      title: "The Fibonacci Fortress".into(),
      category: "Dynamic Programming".into(),
      difficulty: "Medium".into(),
      source: PuzzleSource::Seed,
      description: "The fortress has N floors and you climb either one or two floors per move. Some floors are trapped and cannot be landed on. Count the distinct ways to reach the top floor.\n\nInput: An integer N (1 <= N <= 90) and a list of trapped floor numbers\nOutput: The number of distinct ways to reach floor N\n\nExample:\nInput: N = 4, trapped = [2]\nOutput: 1\nExplanation: The only route is 1 -> 3 -> 4.".into(),
      hint: "This is the climbing-stairs recurrence with holes: ways(i) = ways(i-1) + ways(i-2), except ways(i) = 0 when floor i is trapped. Watch the base cases when floor 1 itself is trapped.".into(),
    },
    Puzzle {
      id: "p4".into(),
      title: "Quicksort's Time Warp".into(),
      category: "Sorting & Searching".into(),
      difficulty: "Hard".into(),
      source: PuzzleSource::Seed,
      description: "An array was sorted with quicksort, but a time warp rotated it an unknown number of positions afterwards. Find the index of a target value in the rotated sorted array in O(log n) time. All values are distinct.\n\nInput: A rotated sorted integer array and a target value (1 <= length <= 10^4)\nOutput: The index of the target, or -1 if it is not present\n\nExample:\nInput: nums = [4,5,6,7,0,1,2], target = 0\nOutput: 4".into(),
      hint: "Binary search still works: at every step one half of the array is properly sorted. Decide which half that is by comparing the endpoints, then check whether the target lies inside it.".into(),
    },
    Puzzle {
      id: "p5".into(),
      title: "Anagram Archipelago".into(),
      category: "Arrays & Strings".into(),
      difficulty: "Easy".into(),
      source: PuzzleSource::Seed,
      description: "Each island in the archipelago is labeled with a word. Two islands belong to the same group when their labels are anagrams of each other. Group the island labels.\n\nInput: A list of lowercase words (1 <= count <= 10^4, each up to 100 letters)\nOutput: The groups of anagrams, in any order\n\nExample:\nInput: [\"eat\",\"tea\",\"tan\",\"ate\",\"nat\",\"bat\"]\nOutput: [[\"eat\",\"tea\",\"ate\"],[\"tan\",\"nat\"],[\"bat\"]]".into(),
      hint: "A word's sorted letters make a canonical key. Map each key to the list of words that share it.".into(),
    },
    Puzzle {
      id: "p6".into(),
      title: "The Dijkstra Dimension".into(),
      category: "Trees & Graphs".into(),
      difficulty: "Medium".into(),
      source: PuzzleSource::Seed,
      description: "A portal network connects dimensions with weighted one-way links. Starting from dimension 1, compute the minimum travel cost to every other dimension, or -1 where no route exists.\n\nInput: N dimensions (1 <= N <= 10^4), a list of directed edges (from, to, weight) with non-negative weights\nOutput: A list of N minimum costs from dimension 1\n\nExample:\nInput: N = 3, edges = [[1,2,4],[1,3,1],[3,2,1]]\nOutput: [0, 2, 1]".into(),
      hint: "Non-negative weights mean Dijkstra's algorithm applies: a priority queue keyed by tentative distance, popping each dimension once with its final cost.".into(),
    },
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn six_seed_puzzles_with_the_known_ids() {
    let ids: Vec<String> = seed_puzzles().iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, vec!["p1", "p2", "p3", "p4", "p5", "p6"]);
  }

  #[test]
  fn every_seed_has_description_and_hint() {
    for p in seed_puzzles() {
      assert!(!p.description.trim().is_empty(), "{} missing description", p.id);
      assert!(!p.hint.trim().is_empty(), "{} missing hint", p.id);
      assert_eq!(p.source, PuzzleSource::Seed);
    }
  }

  #[test]
  fn difficulties_match_the_listing_page() {
    let by_id = |id: &str| {
      seed_puzzles().into_iter().find(|p| p.id == id).unwrap().difficulty
    };
    assert_eq!(by_id("p5"), "Easy");
    assert_eq!(by_id("p1"), "Medium");
    assert_eq!(by_id("p2"), "Hard");
  }
}
