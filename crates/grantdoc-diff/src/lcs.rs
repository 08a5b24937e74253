//! Longest common subsequence alignment over token sequences.
//!
//! Produces a per-token edit script. Common prefix and suffix are stripped
//! before the O(n·m) table is built, so a small edit inside a long section
//! only pays for the region that actually differs.

/// One step of the edit script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Token `old[i]` equals `new[j]`
    Equal(usize, usize),
    /// Token `old[i]` was removed
    Delete(usize),
    /// Token `new[j]` was added
    Insert(usize),
}

/// Align `old` against `new`, returning the edit script in order.
///
/// Deletions are emitted before insertions when both are possible, so a
/// replaced span reads as "delete old, insert new".
pub fn align<T: PartialEq>(old: &[T], new: &[T]) -> Vec<Op> {
    let prefix = old
        .iter()
        .zip(new.iter())
        .take_while(|(a, b)| a == b)
        .count();
    let suffix = old[prefix..]
        .iter()
        .rev()
        .zip(new[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    let old_mid = &old[prefix..old.len() - suffix];
    let new_mid = &new[prefix..new.len() - suffix];

    let mut ops = Vec::with_capacity(old.len().max(new.len()));
    ops.extend((0..prefix).map(|k| Op::Equal(k, k)));
    align_middle(old_mid, new_mid, prefix, &mut ops);

    let old_tail = old.len() - suffix;
    let new_tail = new.len() - suffix;
    ops.extend((0..suffix).map(|k| Op::Equal(old_tail + k, new_tail + k)));
    ops
}

/// Number of `Equal` steps in an edit script
pub fn lcs_len(ops: &[Op]) -> usize {
    ops.iter().filter(|op| matches!(op, Op::Equal(..))).count()
}

fn align_middle<T: PartialEq>(old: &[T], new: &[T], offset: usize, ops: &mut Vec<Op>) {
    let n = old.len();
    let m = new.len();
    if n == 0 {
        ops.extend((0..m).map(|j| Op::Insert(offset + j)));
        return;
    }
    if m == 0 {
        ops.extend((0..n).map(|i| Op::Delete(offset + i)));
        return;
    }

    // table[i][j] = LCS length of old[i..] and new[j..], row-major
    let width = m + 1;
    let mut table = vec![0u32; (n + 1) * width];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            table[i * width + j] = if old[i] == new[j] {
                table[(i + 1) * width + j + 1] + 1
            } else {
                table[(i + 1) * width + j].max(table[i * width + j + 1])
            };
        }
    }

    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if old[i] == new[j] {
            ops.push(Op::Equal(offset + i, offset + j));
            i += 1;
            j += 1;
        } else if table[(i + 1) * width + j] >= table[i * width + j + 1] {
            ops.push(Op::Delete(offset + i));
            i += 1;
        } else {
            ops.push(Op::Insert(offset + j));
            j += 1;
        }
    }
    ops.extend((i..n).map(|k| Op::Delete(offset + k)));
    ops.extend((j..m).map(|k| Op::Insert(offset + k)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        let ops = align(&["a", "b", "c"], &["a", "b", "c"]);
        assert_eq!(ops, vec![Op::Equal(0, 0), Op::Equal(1, 1), Op::Equal(2, 2)]);
    }

    #[test]
    fn test_classic_lcs_length() {
        let old: Vec<char> = "ABCBDAB".chars().collect();
        let new: Vec<char> = "BDCABA".chars().collect();
        assert_eq!(lcs_len(&align(&old, &new)), 4);
    }

    #[test]
    fn test_insertion_in_middle() {
        let ops = align(&["a", "c"], &["a", "b", "c"]);
        assert_eq!(ops, vec![Op::Equal(0, 0), Op::Insert(1), Op::Equal(1, 2)]);
    }

    #[test]
    fn test_replacement_deletes_first() {
        let ops = align(&["a", "x", "c"], &["a", "y", "c"]);
        assert_eq!(
            ops,
            vec![Op::Equal(0, 0), Op::Delete(1), Op::Insert(1), Op::Equal(2, 2)]
        );
    }

    #[test]
    fn test_one_side_empty() {
        assert_eq!(align::<&str>(&[], &["a"]), vec![Op::Insert(0)]);
        assert_eq!(align::<&str>(&["a"], &[]), vec![Op::Delete(0)]);
        assert!(align::<&str>(&[], &[]).is_empty());
    }

    #[test]
    fn test_every_index_visited_once() {
        let old: Vec<char> = "kitten sitting".chars().collect();
        let new: Vec<char> = "sitting kitten".chars().collect();
        let ops = align(&old, &new);

        let olds = ops.iter().filter(|op| !matches!(op, Op::Insert(_))).count();
        let news = ops.iter().filter(|op| !matches!(op, Op::Delete(_))).count();
        assert_eq!(olds, old.len());
        assert_eq!(news, new.len());
    }
}
