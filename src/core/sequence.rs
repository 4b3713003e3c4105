/// Move the element at `from` so it ends up at index `to`, returning a new
/// sequence. Out-of-range indices yield an unchanged copy.
pub fn move_item<T: Clone>(sequence: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = sequence.to_vec();
    if from >= out.len() || to >= out.len() || from == to {
        return out;
    }

    let item = out.remove(from);
    out.insert(to, item);
    out
}
