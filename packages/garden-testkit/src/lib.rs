//! Fixtures and oracles shared by the workspace's tests.

use std::{
	collections::BTreeSet,
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use garden_search::Solution;

pub const REFERENCE_GOAL: u64 = 100_000_000;
pub const REFERENCE_VALUES: [u64; 26] = [
	18_897_109, 12_828_837, 9_461_105, 6_371_773, 5_965_343, 5_946_800, 5_582_170, 5_564_635,
	5_268_860, 4_552_402, 4_335_391, 4_296_250, 4_224_851, 4_192_887, 3_439_809, 3_279_833,
	3_095_313, 2_812_896, 2_783_243, 2_710_489, 2_543_482, 2_356_285, 2_226_009, 2_149_127,
	2_142_508, 2_134_411,
];
/// The only subset of [`REFERENCE_VALUES`] that sums to [`REFERENCE_GOAL`].
pub const REFERENCE_SOLUTION: [usize; 18] =
	[0, 1, 2, 3, 5, 6, 8, 9, 10, 11, 12, 15, 16, 17, 20, 22, 24, 25];

const MAX_ORACLE_ITEMS: usize = 24;

/// Every index subset of `values` summing to `goal`, found by checking all `2^n` masks.
///
/// # Panics
///
/// Panics for inputs longer than 24 items.
pub fn exhaustive_index_sets(values: &[u64], goal: u64) -> BTreeSet<Vec<usize>> {
	assert!(values.len() <= MAX_ORACLE_ITEMS, "oracle input too long: {}", values.len());

	let mut found = BTreeSet::new();

	for bits in 0_u32..(1 << values.len()) {
		let indices: Vec<usize> =
			(0..values.len()).filter(|&index| bits & (1 << index) != 0).collect();
		let sum: u128 = indices.iter().map(|&index| u128::from(values[index])).sum();

		if sum == u128::from(goal) {
			found.insert(indices);
		}
	}

	found
}

pub fn index_sets(solutions: &[Solution]) -> BTreeSet<Vec<usize>> {
	solutions.iter().map(|solution| solution.indices().collect()).collect()
}

/// Each solution's values as a sorted multiset; the outer list is sorted too.
pub fn value_multisets(solutions: &[Solution]) -> Vec<Vec<u64>> {
	let mut multisets: Vec<Vec<u64>> = solutions
		.iter()
		.map(|solution| {
			let mut values = solution.values().to_vec();

			values.sort_unstable();

			values
		})
		.collect();

	multisets.sort();

	multisets
}

pub fn has_duplicate_masks(solutions: &[Solution]) -> bool {
	let unique: BTreeSet<_> = solutions.iter().map(Solution::mask).collect();

	unique.len() != solutions.len()
}

/// Writes `payload` to a fresh TOML file under the system temp directory.
pub fn write_temp_config(prefix: &str, payload: &str) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("{prefix}_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write temp file.");

	path
}
