/// Splits `items` into consecutive batches of `batch_size`; the last one may
/// be shorter. A zero batch size yields no batches.
pub fn in_batches<T>(items: &[T], batch_size: usize) -> impl Iterator<Item = &[T]> {
    let size = if batch_size == 0 { usize::MAX } else { batch_size };
    let items = if batch_size == 0 { &items[..0] } else { items };
    items.chunks(size)
}
