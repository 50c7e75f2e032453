//! Longest common subsequence and longest common substring.

/// Longest common contiguous run of `a` and `b`.
///
/// Returns `(start_in_a, start_in_b, len)`. Among runs of equal length the
/// one starting earliest in `a`, then earliest in `b`, wins.
pub(crate) fn longest_common_run(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // prev[j] = length of the common run ending at a[i - 1], b[j - 1]
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            curr[j] = if a[i - 1] == b[j - 1] { prev[j - 1] + 1 } else { 0 };
            if curr[j] > best.2 {
                best = (i - curr[j], j - curr[j], curr[j]);
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

/// Longest sequence of characters appearing in both strings in the same
/// relative order, not necessarily contiguously.
///
/// ```
/// use fuzzy_metrics::longest_common_subsequence;
///
/// assert_eq!(longest_common_subsequence("AGGTAB", "GXTXAYB"), "GTAB");
/// ```
pub fn longest_common_subsequence(source: &str, target: &str) -> String {
    let a: Vec<char> = source.chars().collect();
    let b: Vec<char> = target.chars().collect();
    let (m, n) = (a.len(), b.len());

    // table[i][j] = LCS length of a[i..] and b[j..]
    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for i in (0..m).rev() {
        for j in (0..n).rev() {
            table[i][j] = if a[i] == b[j] {
                table[i + 1][j + 1] + 1
            } else {
                table[i + 1][j].max(table[i][j + 1])
            };
        }
    }

    let mut out = String::with_capacity(table[0][0]);
    let (mut i, mut j) = (0, 0);
    while i < m && j < n {
        if a[i] == b[j] {
            out.push(a[i]);
            i += 1;
            j += 1;
        } else if table[i + 1][j] >= table[i][j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }
    out
}

/// Longest contiguous run of characters shared by both strings.
///
/// Ties resolve to the run that starts earliest in `source`.
///
/// ```
/// use fuzzy_metrics::longest_common_substring;
///
/// assert_eq!(longest_common_substring("flaw", "lawn"), "law");
/// ```
pub fn longest_common_substring(source: &str, target: &str) -> String {
    let a: Vec<char> = source.chars().collect();
    let b: Vec<char> = target.chars().collect();
    let (start, _, len) = longest_common_run(&a, &b);
    a[start..start + len].iter().collect()
}
