//! Proptest strategies for saved object models.

use proptest::prelude::*;

use crate::models::{SearchFilter, SearchSource, SearchSourceBuilder, Sort, SortOrder};
use crate::version::ServerVersion;

/// Field names as they appear in Kibana index patterns.
pub fn field_name() -> impl Strategy<Value = String> {
    "[a-z@][a-z0-9_]{0,8}(\\.[a-z][a-z0-9_]{0,6})?"
        .prop_filter("not a sort direction", |s| s != "asc" && s != "desc")
}

pub fn sort_order() -> impl Strategy<Value = SortOrder> {
    prop_oneof![Just(SortOrder::Ascending), Just(SortOrder::Descending)]
}

pub fn sort() -> impl Strategy<Value = Sort> {
    (prop::collection::vec(field_name(), 0..4), sort_order())
        .prop_map(|(columns, order)| Sort::new(columns, order))
}

/// One of the versions registered by default.
pub fn registered_version() -> impl Strategy<Value = ServerVersion> {
    prop_oneof![
        Just(ServerVersion::new(5, 5, 3)),
        Just(ServerVersion::new(6, 0, 0)),
        Just(ServerVersion::new(7, 2, 0)),
    ]
}

pub fn search_filter() -> impl Strategy<Value = SearchFilter> {
    prop_oneof![
        (field_name(), "[A-Za-z0-9]{1,10}").prop_map(|(f, v)| SearchFilter::phrase(f, v)),
        field_name().prop_map(SearchFilter::exists),
        field_name().prop_map(|f| SearchFilter::exists(f).negated()),
    ]
}

/// A built search source with an inline index id.
pub fn search_source() -> impl Strategy<Value = SearchSource> {
    (
        "[a-z][a-z0-9-]{0,12}\\*?",
        prop::collection::vec(search_filter(), 0..4),
        prop::option::of("[a-z: ]{1,16}"),
    )
        .prop_map(|(index, filters, query)| {
            let mut builder = SearchSourceBuilder::new().with_index_id(index);
            for filter in filters {
                builder = builder.with_filter(filter);
            }
            if let Some(query) = query {
                builder = builder.with_query(query);
            }
            builder
                .build()
                .expect("generated search source has an index id")
        })
}
