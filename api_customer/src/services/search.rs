use common::error::Res;
use db::dtos::vehicle::VehicleSearchFilter;
use sqlx::SqlitePool;

use crate::dtos::search::{SearchPage, SearchQuery};

/// Fixed catalog page size.
pub const PAGE_SIZE: i64 = 9;

/// Outcome of a catalog search. A VIN filter that pins down exactly one
/// verified vehicle short-circuits to that vehicle instead of a list.
pub enum SearchOutcome {
    Single(i64),
    Page(SearchPage),
}

pub async fn search_catalog(pool: &SqlitePool, query: SearchQuery) -> Res<SearchOutcome> {
    let (filter, page) = normalize(query);

    if let Some(vin) = &filter.vin {
        let ids = db::vehicle::verified_ids_by_vin_fragment(pool, vin, 2).await?;
        if let [only] = ids.as_slice() {
            return Ok(SearchOutcome::Single(*only));
        }
    }

    let total = db::vehicle::count_verified(pool, &filter).await?;
    let offset = (page - 1) * PAGE_SIZE;
    let vehicles = db::vehicle::search_verified(pool, &filter, PAGE_SIZE, offset).await?;

    Ok(SearchOutcome::Page(SearchPage {
        vehicles,
        total_vehicles: total,
        total_pages: total_pages(total),
        page,
    }))
}

/// Turns the raw query string into a filter: blanks are dropped, the
/// "all" body-type sentinel means no constraint, and the page number is
/// clamped to 1-based.
fn normalize(query: SearchQuery) -> (VehicleSearchFilter, i64) {
    let clean =
        |value: Option<String>| value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let filter = VehicleSearchFilter {
        vin: clean(query.vin),
        make: clean(query.make),
        min_price: clean(query.min_price).and_then(|v| v.parse::<f64>().ok()),
        max_price: clean(query.max_price).and_then(|v| v.parse::<f64>().ok()),
        body_type: clean(query.body_type).filter(|body_type| body_type != "all"),
    };
    let page = clean(query.page)
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(1)
        .max(1);

    (filter, page)
}

fn total_pages(total: i64) -> i64 {
    (total as u64).div_ceil(PAGE_SIZE as u64) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::principal::Role;
    use db::dtos::vehicle::ChecklistFlags;
    use db::testing::{approve_vehicle, seed_dealership, seed_user, seed_vehicle};

    #[test]
    fn normalize_drops_blank_and_sentinel_filters() {
        let (filter, page) = normalize(SearchQuery {
            vin: Some("  ".to_string()),
            make: Some("toy".to_string()),
            min_price: Some("".to_string()),
            max_price: Some("not-a-number".to_string()),
            body_type: Some("all".to_string()),
            page: Some("0".to_string()),
        });
        assert!(filter.vin.is_none());
        assert_eq!(filter.make.as_deref(), Some("toy"));
        assert!(filter.min_price.is_none());
        assert!(filter.max_price.is_none());
        assert!(filter.body_type.is_none());
        assert_eq!(page, 1);
    }

    #[test]
    fn normalize_keeps_real_filters() {
        let (filter, page) = normalize(SearchQuery {
            vin: None,
            make: None,
            min_price: Some("1000".to_string()),
            max_price: Some("2000.5".to_string()),
            body_type: Some("sedan".to_string()),
            page: Some("3".to_string()),
        });
        assert_eq!(filter.min_price, Some(1000.0));
        assert_eq!(filter.max_price, Some(2000.5));
        assert_eq!(filter.body_type.as_deref(), Some("sedan"));
        assert_eq!(page, 3);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(9), 1);
        assert_eq!(total_pages(10), 2);
        assert_eq!(total_pages(27), 3);
    }

    #[tokio::test]
    async fn body_type_all_matches_the_unfiltered_search() {
        let pool = db::setup_in_memory().await.unwrap();
        let admin_id = seed_user(&pool, "admin", Role::Admin).await;
        let (_, dealership_id) = seed_dealership(&pool, "a").await;
        for n in 0..3 {
            let vehicle = seed_vehicle(&pool, dealership_id, n).await;
            approve_vehicle(&pool, vehicle.id, admin_id, &ChecklistFlags::default()).await;
        }

        let with_sentinel = SearchQuery {
            body_type: Some("all".to_string()),
            ..SearchQuery::default()
        };
        let without = SearchQuery::default();

        let ids = |outcome: SearchOutcome| match outcome {
            SearchOutcome::Page(page) => page
                .vehicles
                .into_iter()
                .map(|v| v.vehicle.id)
                .collect::<Vec<_>>(),
            SearchOutcome::Single(_) => panic!("expected a result page"),
        };

        let a = ids(search_catalog(&pool, with_sentinel).await.unwrap());
        let b = ids(search_catalog(&pool, without).await.unwrap());
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
    }

    #[tokio::test]
    async fn unique_vin_fragment_short_circuits_to_the_vehicle() {
        let pool = db::setup_in_memory().await.unwrap();
        let admin_id = seed_user(&pool, "admin", Role::Admin).await;
        let (_, dealership_id) = seed_dealership(&pool, "a").await;

        let target = seed_vehicle(&pool, dealership_id, 501).await;
        let other = seed_vehicle(&pool, dealership_id, 17).await;
        approve_vehicle(&pool, target.id, admin_id, &ChecklistFlags::default()).await;
        approve_vehicle(&pool, other.id, admin_id, &ChecklistFlags::default()).await;

        let outcome = search_catalog(
            &pool,
            SearchQuery {
                vin: Some("100501".to_string()),
                ..SearchQuery::default()
            },
        )
        .await
        .unwrap();
        match outcome {
            SearchOutcome::Single(id) => assert_eq!(id, target.id),
            SearchOutcome::Page(_) => panic!("expected the VIN fast-path"),
        }

        // An ambiguous fragment falls through to a normal result page.
        let outcome = search_catalog(
            &pool,
            SearchQuery {
                vin: Some("1HGBH41".to_string()),
                ..SearchQuery::default()
            },
        )
        .await
        .unwrap();
        match outcome {
            SearchOutcome::Page(page) => assert_eq!(page.vehicles.len(), 2),
            SearchOutcome::Single(_) => panic!("fast-path must require a unique match"),
        }
    }

    #[tokio::test]
    async fn out_of_range_page_returns_an_empty_list() {
        let pool = db::setup_in_memory().await.unwrap();
        let admin_id = seed_user(&pool, "admin", Role::Admin).await;
        let (_, dealership_id) = seed_dealership(&pool, "a").await;
        let vehicle = seed_vehicle(&pool, dealership_id, 1).await;
        approve_vehicle(&pool, vehicle.id, admin_id, &ChecklistFlags::default()).await;

        let outcome = search_catalog(
            &pool,
            SearchQuery {
                page: Some("99".to_string()),
                ..SearchQuery::default()
            },
        )
        .await
        .unwrap();
        match outcome {
            SearchOutcome::Page(page) => {
                assert!(page.vehicles.is_empty());
                assert_eq!(page.total_vehicles, 1);
                assert_eq!(page.total_pages, 1);
                assert_eq!(page.page, 99);
            }
            SearchOutcome::Single(_) => panic!("expected a result page"),
        }
    }
}
