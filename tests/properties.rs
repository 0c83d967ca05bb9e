//! Property tests: traversal must never drop, duplicate, or reorder rows
//! across page boundaries, for any order spec and any limit.

use proptest::prelude::*;
use seekset::{
    MemoryRow, MemorySource, Options, OrderExpr, Page, RowValues, SortDir, TraversalParams, Value,
    paginate,
};

/// Rows as (id, group) pairs; ids are unique, groups repeat.
fn build_source(rows: &[(i64, i64)], grp_dir: SortDir) -> MemorySource {
    let ordering = match grp_dir {
        SortDir::Asc => OrderExpr::asc("grp"),
        SortDir::Desc => OrderExpr::desc("grp"),
    };
    let mut source = MemorySource::new("id", &["id", "grp"]).with_ordering(vec![ordering]);
    for (id, grp) in rows {
        source.push(MemoryRow::new().with("id", *id).with("grp", *grp));
    }
    source
}

fn expected_ids(rows: &[(i64, i64)], grp_dir: SortDir, id_dir: SortDir) -> Vec<i64> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        let by_grp = match grp_dir {
            SortDir::Asc => a.1.cmp(&b.1),
            SortDir::Desc => b.1.cmp(&a.1),
        };
        by_grp.then(match id_dir {
            SortDir::Asc => a.0.cmp(&b.0),
            SortDir::Desc => b.0.cmp(&a.0),
        })
    });
    sorted.iter().map(|row| row.0).collect()
}

fn page_ids(page: &Page<MemoryRow>) -> Vec<i64> {
    page.rows
        .iter()
        .map(|row| match row.value("id") {
            Some(Value::Int(id)) => id,
            other => panic!("unexpected id {other:?}"),
        })
        .collect()
}

fn walk_forward(source: &MemorySource, options: &Options) -> Vec<Page<MemoryRow>> {
    let mut pages = Vec::new();
    let mut params = TraversalParams::none();
    loop {
        let page = paginate(source, &params, options).expect("paginate");
        let after = page.after.clone();
        pages.push(page);
        assert!(pages.len() <= 10_000, "runaway traversal");
        match after {
            Some(token) => params = TraversalParams::from_tokens(Some(token), None),
            None => return pages,
        }
    }
}

fn dir(asc: bool) -> SortDir {
    if asc { SortDir::Asc } else { SortDir::Desc }
}

fn rows_strategy() -> impl Strategy<Value = Vec<(i64, i64)>> {
    proptest::collection::btree_set(0_i64..500, 1..40).prop_flat_map(|ids| {
        let ids: Vec<i64> = ids.into_iter().collect();
        let len = ids.len();
        proptest::collection::vec(0_i64..4, len)
            .prop_map(move |grps| ids.iter().copied().zip(grps).collect::<Vec<(i64, i64)>>())
    })
}

proptest! {
    /// Following after-cursors from the start visits every row exactly once,
    /// in the order spec's total order.
    #[test]
    fn forward_walk_has_no_gaps_or_dupes(
        rows in rows_strategy(),
        limit in 1_u32..6,
        grp_asc in any::<bool>(),
        id_asc in any::<bool>(),
    ) {
        let source = build_source(&rows, dir(grp_asc));
        let options = Options::new().limit(limit).direction(dir(id_asc));

        let pages = walk_forward(&source, &options);
        let seen: Vec<i64> = pages.iter().flat_map(page_ids).collect();

        prop_assert_eq!(seen, expected_ids(&rows, dir(grp_asc), dir(id_asc)));

        // every page but the last is exactly `limit` rows
        for page in &pages[..pages.len() - 1] {
            prop_assert_eq!(page.rows.len(), limit as usize);
        }
        prop_assert!(pages[pages.len() - 1].rows.len() <= limit as usize);
    }

    /// Paginating backward from a page's before-cursor reproduces the
    /// previous page, rows and cursors alike.
    #[test]
    fn backward_round_trip_reproduces_pages(
        rows in rows_strategy(),
        limit in 1_u32..6,
        grp_asc in any::<bool>(),
        id_asc in any::<bool>(),
    ) {
        let source = build_source(&rows, dir(grp_asc));
        let options = Options::new().limit(limit).direction(dir(id_asc));

        let pages = walk_forward(&source, &options);
        for k in 1..pages.len() {
            let before = pages[k].before.clone();
            prop_assert!(before.is_some(), "page {} lost its before cursor", k);
            let reproduced = paginate(
                &source,
                &TraversalParams::from_tokens(None, before),
                &options,
            )
            .expect("paginate backward");
            prop_assert_eq!(&reproduced, &pages[k - 1], "page {}", k);
        }
    }

    /// A fetch that fits entirely within the limit leaves the open end nil.
    #[test]
    fn boundary_page_has_nil_open_cursor(
        rows in rows_strategy(),
        grp_asc in any::<bool>(),
        id_asc in any::<bool>(),
    ) {
        let source = build_source(&rows, dir(grp_asc));
        let limit = u32::try_from(rows.len()).unwrap().max(1);
        let options = Options::new().limit(limit).direction(dir(id_asc));

        let page = paginate(&source, &TraversalParams::none(), &options).expect("paginate");
        prop_assert_eq!(page.rows.len(), rows.len());
        prop_assert_eq!(&page.after, &None);
        prop_assert_eq!(&page.before, &None);
    }

    /// Walking backward from the final page retraces the forward pages in
    /// reverse order.
    #[test]
    fn backward_walk_mirrors_forward_walk(
        rows in rows_strategy(),
        limit in 1_u32..6,
        grp_asc in any::<bool>(),
    ) {
        let source = build_source(&rows, dir(grp_asc));
        let options = Options::new().limit(limit);

        let forward = walk_forward(&source, &options);

        let mut backward = vec![forward[forward.len() - 1].clone()];
        loop {
            let before = backward[backward.len() - 1].before.clone();
            let Some(token) = before else { break };
            let page = paginate(
                &source,
                &TraversalParams::from_tokens(None, Some(token)),
                &options,
            )
            .expect("paginate backward");
            backward.push(page);
            prop_assert!(backward.len() <= forward.len(), "backward walk overran");
        }

        backward.reverse();
        prop_assert_eq!(backward, forward);
    }
}
