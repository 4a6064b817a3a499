/// Yields the confidence attached to each suggested dependency, in `75..=94`.
pub trait ConfidenceSource {
    fn next_confidence(&mut self) -> u8;
}
