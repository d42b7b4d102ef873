use document_store::{DocumentId, ResourceManager, StoreUri};
use restaurant_ops::config::Config;
use restaurant_ops::lifecycle::RestaurantSystem;
use restaurant_ops::menu_items::MenuError;
use restaurant_ops::model::{
    Customer, MenuItemCreate, MenuItemPatch, MenuStatus, OrderCreate, OrderLine, OrderStatus,
};
use restaurant_ops::orders::{OrderError, TransitionPolicy};

fn arepa() -> MenuItemCreate {
    MenuItemCreate {
        name: "Arepa".into(),
        price: 5.0,
        category: "snack".into(),
        status: None,
    }
}

fn order(display_id: &str) -> OrderCreate {
    OrderCreate {
        display_id: display_id.into(),
        customer: Customer { name: "Ana".into() },
        items: vec![OrderLine {
            name: "Arepa".into(),
            quantity: 2,
        }],
        total: 10.0,
        status: None,
    }
}

/// Full walk through the menu with the real collection task.
#[tokio::test]
async fn test_menu_lifecycle() {
    let system = RestaurantSystem::in_memory(TransitionPolicy::Permissive, 8);

    let item = system.menu.create(arepa()).await.expect("Failed to create item");
    assert_eq!(item.status, MenuStatus::Available);
    assert_eq!(item.id.as_str().len(), 32);

    // Partial update keeps untouched fields
    let updated = system
        .menu
        .update(
            item.id.clone(),
            MenuItemPatch {
                price: Some(6.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.price, 6.0);
    assert_eq!(updated.name, "Arepa");
    assert_eq!(updated.category, "snack");

    // Toggle twice returns to the original status
    let once = system.menu.toggle_availability(item.id.clone()).await.unwrap();
    assert_eq!(once.status, MenuStatus::Unavailable);
    let twice = system.menu.toggle_availability(item.id.clone()).await.unwrap();
    assert_eq!(twice.status, MenuStatus::Available);

    // Delete, then every id-addressed operation is NotFound
    system.menu.delete(item.id.clone()).await.unwrap();
    assert!(system.menu.list().await.unwrap().is_empty());
    assert_eq!(
        system.menu.toggle_availability(item.id.clone()).await,
        Err(MenuError::NotFound(item.id.clone()))
    );
    assert_eq!(
        system.menu.delete(item.id.clone()).await,
        Err(MenuError::NotFound(item.id.clone()))
    );

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_menu_update_validation_leaves_item_unchanged() {
    let system = RestaurantSystem::in_memory(TransitionPolicy::Permissive, 8);
    let item = system.menu.create(arepa()).await.unwrap();

    let result = system
        .menu
        .update(
            item.id.clone(),
            MenuItemPatch {
                name: Some(String::new()),
                price: Some(99.0),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(MenuError::Validation(_))));
    assert_eq!(system.menu.get(item.id.clone()).await.unwrap(), item);

    let unknown = system
        .menu
        .update(DocumentId::from("not-an-id"), MenuItemPatch::default())
        .await;
    assert_eq!(unknown, Err(MenuError::NotFound(DocumentId::from("not-an-id"))));

    system.shutdown().await.unwrap();
}

/// Concurrent toggles are applied one at a time inside the collection task.
#[tokio::test]
async fn test_concurrent_toggles_are_atomic() {
    let system = RestaurantSystem::in_memory(TransitionPolicy::Permissive, 64);
    let item = system.menu.create(arepa()).await.unwrap();

    let mut tasks = vec![];
    for _ in 0..20 {
        let menu = system.menu.clone();
        let id = item.id.clone();
        tasks.push(tokio::spawn(async move { menu.toggle_availability(id).await }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let stored = system.menu.get(item.id).await.unwrap();
    assert_eq!(stored.status, MenuStatus::Available);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_lifecycle() {
    let system = RestaurantSystem::in_memory(TransitionPolicy::Permissive, 8);

    let created = system.orders.create(order("A1")).await.unwrap();
    assert_eq!(created.status, OrderStatus::New);
    assert_eq!(created.created_at, created.updated_at);

    let moved = system
        .orders
        .update_status(created.id.clone(), OrderStatus::InProgress)
        .await
        .unwrap();
    assert_eq!(moved.status, OrderStatus::InProgress);
    assert_eq!(moved.created_at, created.created_at);
    assert!(moved.updated_at >= created.updated_at);

    // Permissive policy allows going back
    let back = system
        .orders
        .update_status(created.id.clone(), OrderStatus::New)
        .await
        .unwrap();
    assert_eq!(back.status, OrderStatus::New);

    system.orders.delete(created.id.clone()).await.unwrap();
    assert!(system.orders.list().await.unwrap().is_empty());
    assert_eq!(
        system
            .orders
            .update_status(created.id.clone(), OrderStatus::Ready)
            .await,
        Err(OrderError::NotFound(created.id))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_orders_list_newest_first() {
    let system = RestaurantSystem::in_memory(TransitionPolicy::Permissive, 8);
    for display_id in ["A1", "A2", "A3"] {
        system.orders.create(order(display_id)).await.unwrap();
    }

    let listed: Vec<String> = system
        .orders
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.display_id)
        .collect();
    assert_eq!(listed, ["A3", "A2", "A1"]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_forward_only_policy() {
    let system = RestaurantSystem::in_memory(TransitionPolicy::ForwardOnly, 8);
    let created = system.orders.create(order("B7")).await.unwrap();

    let skip = system
        .orders
        .update_status(created.id.clone(), OrderStatus::Ready)
        .await;
    assert_eq!(
        skip,
        Err(OrderError::InvalidTransition {
            from: OrderStatus::New,
            to: OrderStatus::Ready
        })
    );

    for status in [OrderStatus::InProgress, OrderStatus::Ready] {
        system
            .orders
            .update_status(created.id.clone(), status)
            .await
            .unwrap();
    }
    let stored = system.orders.get(created.id).await.unwrap();
    assert_eq!(stored.status, OrderStatus::Ready);

    system.shutdown().await.unwrap();
}

/// Documents written through one system are visible to the next one on the same directory.
#[tokio::test]
async fn test_file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        host: "127.0.0.1".into(),
        port: 0,
        store_uri: StoreUri::File(dir.path().to_path_buf()),
        order_transitions: TransitionPolicy::Permissive,
        channel_capacity: 8,
        shutdown_timeout_secs: 1,
    };

    let system = RestaurantSystem::open(&config).await.unwrap();
    let item = system.menu.create(arepa()).await.unwrap();
    system.menu.toggle_availability(item.id.clone()).await.unwrap();
    let placed = system.orders.create(order("A1")).await.unwrap();
    system.shutdown().await.unwrap();

    let system = RestaurantSystem::open(&config).await.unwrap();
    let menu = system.menu.list().await.unwrap();
    assert_eq!(menu.len(), 1);
    assert_eq!(menu[0].id, item.id);
    assert_eq!(menu[0].status, MenuStatus::Unavailable);

    let orders = system.orders.list().await.unwrap();
    assert_eq!(orders, vec![placed]);
    system.shutdown().await.unwrap();
}
