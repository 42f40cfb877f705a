//! Generic continuation-token pagination.
//!
//! Every list/lookup-style AWS operation follows the same wire contract: the
//! request carries an optional opaque token, the response carries a batch of
//! items plus an optional token for the next batch. [`fetch_all`] drives that
//! loop once, for every operation, so the per-command code only has to say how
//! to fetch a single page and what to do with its items.
//!
//! The driver performs no I/O of its own and holds no state across calls;
//! cancellation and transport concerns belong to the `fetch_page` closure.

use std::future::Future;

/// One page of results from a list-style API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items in the order the server returned them.
    pub items: Vec<T>,
    /// Token for the next page; `None` means the listing is exhausted.
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_token: Option<String>) -> Self {
        Self { items, next_token }
    }

    /// A page with no continuation token (the final one).
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_token: None,
        }
    }
}

/// Drive a paginated fetch to completion.
///
/// `fetch_page` performs exactly one round trip: given a continuation token
/// (possibly `None`), it returns a [`Page`]. `on_page` is invoked once per
/// successful fetch with the page's items and a flag indicating manual mode.
///
/// Two modes, selected by `starting_token`:
///
/// - **Automatic** (`None`): fetch repeatedly, starting without a token,
///   until the response carries no further token. Returns `Ok(None)`.
/// - **Manual** (`Some(token)`): fetch exactly once with the supplied token
///   and return the response's continuation token, whether or not one is
///   present. The caller owns any further pagination.
///
/// Tokens are passed through unchanged; the driver never fabricates or
/// inspects them. An empty page with a token present does not terminate the
/// loop; the server's exhaustion signal is solely the absence of a token.
///
/// Errors from `fetch_page` are not retried: the first failure aborts the
/// loop and propagates unchanged. Pages already handed to `on_page` stay
/// delivered.
pub async fn fetch_all<T, E, F, Fut, C>(
    starting_token: Option<String>,
    mut fetch_page: F,
    mut on_page: C,
) -> Result<Option<String>, E>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
    C: FnMut(Vec<T>, bool),
{
    let manual = starting_token.is_some();
    let mut token = starting_token;

    loop {
        let page = fetch_page(token.clone()).await?;
        on_page(page.items, manual);
        token = page.next_token;

        if manual {
            // Single-page mode: the caller resumes with the returned token.
            return Ok(token);
        }

        match token.as_deref() {
            Some(t) if !t.is_empty() => {
                tracing::debug!("continuing pagination with server-issued token");
            }
            _ => return Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn page(items: &[&str], token: Option<&str>) -> Page<String> {
        Page::new(
            items.iter().map(|s| s.to_string()).collect(),
            token.map(|t| t.to_string()),
        )
    }

    #[tokio::test]
    async fn automatic_mode_stops_when_token_absent() {
        let mut pages = VecDeque::from(vec![
            Ok::<_, String>(page(&["a"], Some("t1"))),
            Ok(page(&["b"], Some("t2"))),
            Ok(page(&["c"], None)),
        ]);
        let mut calls = 0usize;

        let final_token = fetch_all(
            None,
            |_token| {
                let next = pages.pop_front().expect("fetched past exhaustion");
                async move { next }
            },
            |_items, _manual| calls += 1,
        )
        .await
        .unwrap();

        assert_eq!(calls, 3);
        assert_eq!(final_token, None);
    }

    #[tokio::test]
    async fn manual_mode_fetches_exactly_once() {
        let mut fetches = 0usize;
        let mut on_page_calls = 0usize;

        let final_token = fetch_all(
            Some("X".to_string()),
            |token| {
                fetches += 1;
                assert_eq!(token.as_deref(), Some("X"));
                async move { Ok::<_, String>(page(&["a", "b"], Some("more"))) }
            },
            |_items, manual| {
                on_page_calls += 1;
                assert!(manual);
            },
        )
        .await
        .unwrap();

        assert_eq!(fetches, 1);
        assert_eq!(on_page_calls, 1);
        // The token is surfaced, not followed.
        assert_eq!(final_token.as_deref(), Some("more"));
    }

    #[tokio::test]
    async fn manual_mode_returns_none_when_listing_exhausted() {
        let final_token = fetch_all(
            Some("X".to_string()),
            |_token| async move { Ok::<_, String>(page(&[], None)) },
            |_items, _manual| {},
        )
        .await
        .unwrap();

        assert_eq!(final_token, None);
    }

    #[tokio::test]
    async fn items_arrive_in_server_order_and_grouping() {
        let mut pages = VecDeque::from(vec![
            Ok::<_, String>(page(&["a", "b"], Some("t1"))),
            Ok(page(&["c"], Some("t2"))),
            Ok(page(&["d", "e", "f"], None)),
        ]);
        let mut seen: Vec<Vec<String>> = Vec::new();

        fetch_all(
            None,
            |_token| {
                let next = pages.pop_front().unwrap();
                async move { next }
            },
            |items, manual| {
                assert!(!manual);
                seen.push(items);
            },
        )
        .await
        .unwrap();

        assert_eq!(
            seen,
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string()],
                vec!["d".to_string(), "e".to_string(), "f".to_string()],
            ]
        );
    }

    #[tokio::test]
    async fn empty_page_with_token_continues() {
        let mut pages = VecDeque::from(vec![
            Ok::<_, String>(page(&[], Some("keep-going"))),
            Ok(page(&["a"], None)),
        ]);
        let mut calls = 0usize;

        fetch_all(
            None,
            |token| {
                if calls > 0 {
                    assert_eq!(token.as_deref(), Some("keep-going"));
                }
                calls += 1;
                let next = pages.pop_front().unwrap();
                async move { next }
            },
            |_items, _manual| {},
        )
        .await
        .unwrap();

        assert_eq!(calls, 2);
    }

    #[tokio::test]
    async fn empty_string_token_terminates_automatic_mode() {
        let mut pages = VecDeque::from(vec![Ok::<_, String>(page(&["a"], Some("")))]);
        let mut calls = 0usize;

        let final_token = fetch_all(
            None,
            |_token| {
                calls += 1;
                let next = pages.pop_front().unwrap();
                async move { next }
            },
            |_items, _manual| {},
        )
        .await
        .unwrap();

        assert_eq!(calls, 1);
        assert_eq!(final_token, None);
    }

    #[tokio::test]
    async fn failure_short_circuits_and_propagates_unchanged() {
        let mut pages = VecDeque::from(vec![
            Ok(page(&["a"], Some("t1"))),
            Err("throttled".to_string()),
            Ok(page(&["never"], None)),
        ]);
        let mut on_page_calls = 0usize;

        let err = fetch_all(
            None,
            |_token| {
                let next = pages.pop_front().unwrap();
                async move { next }
            },
            |_items, _manual| on_page_calls += 1,
        )
        .await
        .unwrap_err();

        assert_eq!(on_page_calls, 1);
        assert_eq!(err, "throttled");
        // The third page was never requested.
        assert_eq!(pages.len(), 1);
    }

    #[tokio::test]
    async fn tokens_pass_through_byte_for_byte() {
        let issued = ["t-one", "t/two=padded==", "final"];
        let mut pages = VecDeque::from(vec![
            Ok::<_, String>(page(&["a"], Some(issued[0]))),
            Ok(page(&["b"], Some(issued[1]))),
            Ok(page(&["c"], Some(issued[2]))),
            Ok(page(&["d"], None)),
        ]);
        let mut received: Vec<Option<String>> = Vec::new();

        fetch_all(
            None,
            |token| {
                received.push(token);
                let next = pages.pop_front().unwrap();
                async move { next }
            },
            |_items, _manual| {},
        )
        .await
        .unwrap();

        assert_eq!(received.len(), 4);
        assert_eq!(received[0], None);
        for (i, token) in issued.iter().enumerate() {
            assert_eq!(received[i + 1].as_deref(), Some(*token));
        }
    }
}
