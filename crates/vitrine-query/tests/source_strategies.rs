//! Source strategies executed end to end against the in-memory catalog.

use rstest::{fixture, rstest};
use vitrine_query::{InMemoryDataSource, ProductDataSource, QueryBuilder};
use vitrine_types::{ProductRow, RuntimeArgs, Settings, Source, SourceType, StockStatus};

#[fixture]
fn catalog() -> InMemoryDataSource {
	let mut discounted = ProductRow::new(20, "Discounted Kettle").with_price(30.0);
	discounted.on_sale = true;
	discounted.category_ids = vec![2];

	let mut backordered = ProductRow::new(21, "Backordered Cup").with_price(6.0);
	backordered.stock.status = StockStatus::OnBackorder;
	backordered.category_ids = vec![1];

	let mut mug = ProductRow::new(22, "Mug").with_price(9.0);
	mug.category_ids = vec![1, 3];
	mug.sku = Some("MUG-22".to_string());

	InMemoryDataSource::new([discounted, backordered, mug])
}

async fn fetch(catalog: &InMemoryDataSource, source: &Source, args: &RuntimeArgs) -> Vec<u64> {
	let settings = Settings::default();
	let on_sale = catalog.on_sale_ids().await.unwrap();
	let query = QueryBuilder::new(source, &settings)
		.runtime(args)
		.on_sale_ids(&on_sale)
		.build();
	let result = catalog.query(&query).await.unwrap();
	result.rows.iter().map(|row| row.id).collect()
}

#[rstest]
#[tokio::test]
async fn test_empty_id_sets_never_fall_back_to_all(catalog: InMemoryDataSource) {
	for source in [
		Source::new(SourceType::Specific),
		Source::new(SourceType::Category),
	] {
		assert!(fetch(&catalog, &source, &RuntimeArgs::new()).await.is_empty());
	}
}

#[rstest]
#[tokio::test]
async fn test_sale_source(catalog: InMemoryDataSource) {
	let ids = fetch(&catalog, &Source::new(SourceType::Sale), &RuntimeArgs::new()).await;
	assert_eq!(ids, vec![20]);
}

#[rstest]
#[tokio::test]
async fn test_sale_source_with_nothing_on_sale() {
	let catalog = InMemoryDataSource::new([ProductRow::new(1, "Plain")]);
	let ids = fetch(&catalog, &Source::new(SourceType::Sale), &RuntimeArgs::new()).await;
	assert!(ids.is_empty());
}

#[rstest]
#[tokio::test]
async fn test_category_source_is_an_intersection_or(catalog: InMemoryDataSource) {
	let mut source = Source::category([3, 2]);
	source.sort.order = vitrine_types::SortDirection::Asc;
	source.sort.order_by = vitrine_types::OrderBy::Id;
	let ids = fetch(&catalog, &source, &RuntimeArgs::new()).await;
	assert_eq!(ids, vec![20, 22]);
}

#[rstest]
#[tokio::test]
async fn test_search_matches_sku(catalog: InMemoryDataSource) {
	let ids = fetch(
		&catalog,
		&Source::category([1]),
		&RuntimeArgs::new().with_search("mug-2"),
	)
	.await;
	assert_eq!(ids, vec![22]);
}
