/// Answers whether a wiki page exists, so links to missing pages can be flagged.
pub trait PageIndex: Send + Sync {
    /// `candidate` is the resolved link path without its fragment, e.g. `/People/Paul`.
    fn page_exists(&self, candidate: &str) -> bool;
}

impl<F> PageIndex for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn page_exists(&self, candidate: &str) -> bool {
        self(candidate)
    }
}
