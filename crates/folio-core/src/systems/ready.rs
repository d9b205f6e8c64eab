pub const LOADED_CLASS: &str = "loaded";

/// Whether `<body>` can be marked loaded right away for a `document.readyState`
/// value; while the document is still parsing the host waits for `DOMContentLoaded`.
pub fn ready_now(ready_state: &str) -> bool {
    ready_state != "loading"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_only_while_loading() {
        assert!(!ready_now("loading"));
        assert!(ready_now("interactive"));
        assert!(ready_now("complete"));
    }
}
