use crate::suite::support::ScriptedFetcher;
use crate::suite::support::node;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use workflowy_export::ExportCache;
use workflowy_export::ExportSearch;
use workflowy_export::SearchPolicy;
use workflowy_export::SearchQuery;

fn outline() -> Vec<workflowy_protocol::Node> {
    let mut done = node("done", "Archive", Some("home"));
    done.completed_at = Some(1_700_000_000);
    vec![
        node("home", "Home", None),
        node("lists", "Lists", Some("home")),
        node("milk", "Buy milk", Some("lists")),
        done,
        node("old-milk", "Oat milk", Some("done")),
    ]
}

#[tokio::test(start_paused = true)]
async fn search_reads_through_cache_and_attaches_paths() {
    let fetcher = ScriptedFetcher::with_nodes(Duration::ZERO, outline());
    let cache = Arc::new(ExportCache::new(fetcher.clone(), Duration::from_secs(60)));
    let search = ExportSearch::new(cache, SearchPolicy::default());
    let cancel = CancellationToken::new();

    let query = SearchQuery::new("MILK", None, None).expect("valid query");
    let hits = search.search(&query, &cancel).await.expect("search");
    let found: Vec<(&str, Vec<String>)> = hits
        .iter()
        .map(|hit| (hit.node.id.as_str(), hit.path.clone()))
        .collect();
    assert_eq!(
        vec![
            ("milk", vec!["Home".to_string(), "Lists".to_string()]),
            ("old-milk", vec!["Home".to_string(), "Archive".to_string()]),
        ],
        found
    );

    let open = SearchQuery::new("milk", Some(false), None).expect("valid query");
    let hits = search.search(&open, &cancel).await.expect("search");
    let ids: Vec<&str> = hits.iter().map(|hit| hit.node.id.as_str()).collect();
    assert_eq!(vec!["milk"], ids);

    assert_eq!(1, fetcher.calls());
}

#[tokio::test(start_paused = true)]
async fn search_surfaces_fetch_failure() {
    let fetcher = ScriptedFetcher::new(Duration::ZERO);
    fetcher.set_failing(true);
    let cache = Arc::new(ExportCache::new(fetcher.clone(), Duration::from_secs(60)));
    let search = ExportSearch::new(cache, SearchPolicy::default());

    let query = SearchQuery::new("anything", None, None).expect("valid query");
    let err = search
        .search(&query, &CancellationToken::new())
        .await
        .expect_err("fetch fails");
    assert_eq!("upstream unavailable on call 1", err.to_string());
}
