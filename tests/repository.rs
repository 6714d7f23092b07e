use storefront::domain::banner::{NewBanner, UpdateBanner};
use storefront::domain::category::{NewCategory, UpdateCategory};
use storefront::domain::product::{NewProduct, ProductListQuery, ProductStatus, UpdateProduct};
use storefront::repository::errors::RepositoryError;
use storefront::services::ServiceError;
use storefront::services::seed::seed_catalog;
use storefront::repository::{
    BannerReader, BannerWriter, CategoryReader, CategoryWriter, DieselRepository, ProductReader,
    ProductWriter,
};

mod common;

fn new_product(name: &str, category: &str, price: i64) -> NewProduct {
    NewProduct::new(
        name,
        "Sample description",
        category,
        price,
        price * 10,
        "https://example.com/cover.png",
        "https://example.com/file.zip",
    )
}

#[test]
fn test_product_repository_crud() {
    let test_db = common::TestDb::new("test_product_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let reels = repo
        .create_product(
            &new_product("Reels Bundle!!", "Reels Bundle", 199)
                .with_sales(1250)
                .with_badges(vec!["Bestseller".to_string(), "New".to_string()])
                .with_video_urls(Vec::new()),
        )
        .unwrap();
    let ebook = repo
        .create_product(&new_product("Growth E-book", "E-books", 49).with_status(ProductStatus::Draft))
        .unwrap();

    assert_eq!(reels.slug, "reels-bundle");
    assert_eq!(reels.badges, Some(vec!["Bestseller".to_string(), "New".to_string()]));
    assert_eq!(reels.video_urls, Some(Vec::new()));
    assert_eq!(reels.screenshot_urls, None);
    assert_eq!(ebook.status, ProductStatus::Draft);

    let by_slug = repo.get_product_by_slug("reels-bundle").unwrap().unwrap();
    assert_eq!(by_slug, reels);
    let by_id = repo.get_product_by_id(ebook.id).unwrap().unwrap();
    assert_eq!(by_id, ebook);

    let all = repo.list_products(ProductListQuery::new()).unwrap();
    assert_eq!(
        all.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![reels.id, ebook.id]
    );
    let ebooks = repo
        .list_products(ProductListQuery::new().category("E-books"))
        .unwrap();
    assert_eq!(ebooks.len(), 1);
    assert_eq!(ebooks[0].id, ebook.id);
    assert!(
        repo.list_products(ProductListQuery::new().category("e-books"))
            .unwrap()
            .is_empty()
    );

    let updated = repo
        .update_product(
            reels.id,
            &UpdateProduct::new().name("Renamed").price(0).badges(None),
        )
        .unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.price, 0);
    assert_eq!(updated.badges, None);
    assert_eq!(updated.video_urls, Some(Vec::new()));
    assert_eq!(updated.slug, reels.slug);
    assert_eq!(updated.created_at, reels.created_at);

    let unchanged = repo.update_product(ebook.id, &UpdateProduct::new()).unwrap();
    assert_eq!(unchanged, ebook);

    assert_eq!(repo.delete_product(ebook.id).unwrap(), 1);
    assert_eq!(repo.delete_product(ebook.id).unwrap(), 0);
    assert!(repo.get_product_by_id(ebook.id).unwrap().is_none());
}

#[test]
fn test_update_missing_records_is_not_found() {
    let test_db = common::TestDb::new("test_update_missing_records.db");
    let repo = DieselRepository::new(test_db.pool());

    let err = repo
        .update_product(999_999, &UpdateProduct::new().sales(5))
        .expect_err("expected missing product");
    assert!(matches!(err, RepositoryError::NotFound));

    let err = repo
        .update_product(999_999, &UpdateProduct::new())
        .expect_err("expected missing product for empty patch");
    assert!(matches!(err, RepositoryError::NotFound));

    let err = repo
        .update_category(42, &UpdateCategory::new().color("teal"))
        .expect_err("expected missing category");
    assert!(matches!(err, RepositoryError::NotFound));

    let err = repo
        .update_banner(42, &UpdateBanner::new())
        .expect_err("expected missing banner");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_duplicate_slug_is_a_database_error() {
    let test_db = common::TestDb::new("test_duplicate_slug.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_product(&new_product("---", "Misc", 10)).unwrap();
    let err = repo
        .create_product(&new_product("!!!", "Misc", 10))
        .expect_err("second empty slug must collide");

    assert!(matches!(err, RepositoryError::Database(_)));
}

#[test]
fn test_category_repository_crud() {
    let test_db = common::TestDb::new("test_category_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let reels = repo
        .create_category(&NewCategory::new(
            "Reels Bundle",
            "Professional Instagram Reels templates",
            "from-orange-500 to-red-500",
        ))
        .unwrap();
    assert_eq!(reels.slug, "reels-bundle");

    let err = repo
        .create_category(&NewCategory::new("Reels Bundle", "again", "red"))
        .expect_err("expected unique violation");
    assert!(matches!(err, RepositoryError::Database(_)));

    let renamed = repo
        .update_category(reels.id, &UpdateCategory::new().name("Reels"))
        .unwrap();
    assert_eq!(renamed.name, "Reels");
    assert_eq!(renamed.slug, "reels-bundle");

    let listed = repo.list_categories().unwrap();
    assert_eq!(listed, vec![renamed.clone()]);

    assert_eq!(repo.delete_category(reels.id).unwrap(), 1);
    assert!(repo.get_category_by_id(reels.id).unwrap().is_none());
    assert_eq!(repo.delete_category(reels.id).unwrap(), 0);
}

#[test]
fn test_banner_repository_crud() {
    let test_db = common::TestDb::new("test_banner_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let hero = repo
        .create_banner(&NewBanner::new(
            "LIMITED TIME: 90% OFF ALL BUNDLES!",
            "Get instant access",
            "Get Instant Access",
            "/dashboard",
            "hero",
            1,
            "from-orange-500 via-red-500 to-purple-600",
        ))
        .unwrap();
    let draft = repo
        .create_banner(
            &NewBanner::new("Soon", "Coming", "Wait", "/", "dashboard", 0, "gray")
                .with_status("draft"),
        )
        .unwrap();

    assert_eq!(hero.status, "active");
    assert_eq!(draft.status, "draft");
    assert_eq!(draft.priority, 0);

    let updated = repo
        .update_banner(hero.id, &UpdateBanner::new().priority(0).status("inactive"))
        .unwrap();
    assert_eq!(updated.priority, 0);
    assert_eq!(updated.status, "inactive");
    assert_eq!(updated.title, hero.title);

    let listed = repo.list_banners().unwrap();
    assert_eq!(
        listed.iter().map(|b| b.id).collect::<Vec<_>>(),
        vec![hero.id, draft.id]
    );

    assert_eq!(repo.delete_banner(draft.id).unwrap(), 1);
    assert!(repo.get_banner_by_id(draft.id).unwrap().is_none());
}

#[test]
fn test_failed_seed_leaves_nothing_behind() {
    let test_db = common::TestDb::new("test_failed_seed_leaves_nothing_behind.db");
    let repo = DieselRepository::new(test_db.pool());

    let clash = repo
        .create_product(&new_product(
            "Complete Notion Productivity Bundle",
            "Notion Templates",
            99,
        ))
        .unwrap();

    let result = seed_catalog(&repo);
    assert!(
        matches!(&result, Err(ServiceError::Internal(message)) if message.contains("UNIQUE")),
        "unexpected result: {result:?}"
    );
    assert!(repo.list_categories().unwrap().is_empty());
    assert!(repo.list_banners().unwrap().is_empty());
    assert_eq!(repo.list_products(ProductListQuery::new()).unwrap(), vec![clash.clone()]);

    repo.delete_product(clash.id).unwrap();

    let summary = seed_catalog(&repo).unwrap().expect("retry must seed");
    assert_eq!(summary.products, 8);
    assert_eq!(repo.list_categories().unwrap().len(), 5);
    assert_eq!(repo.list_banners().unwrap().len(), 2);
    assert_eq!(repo.list_products(ProductListQuery::new()).unwrap().len(), 8);

    assert!(seed_catalog(&repo).unwrap().is_none());
}
