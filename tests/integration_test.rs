use actor_framework::ActorClient;
use futures::StreamExt;
use resource_feed::config::StoreSettings;
use resource_feed::lifecycle::ResourceSystem;
use resource_feed::model::{default_seed, Resource, ResourceCreate};
use std::collections::HashSet;
use std::time::Duration;
use tokio::time::timeout;

const WAIT: Duration = Duration::from_secs(2);

fn start() -> ResourceSystem {
    ResourceSystem::start(StoreSettings::default(), default_seed()).expect("Failed to start")
}

fn ids(resources: &[Resource]) -> Vec<String> {
    resources.iter().map(|r| r.id.to_string()).collect()
}

/// Seed, filter, create, filter again: the walkthrough a fresh server answers.
#[tokio::test]
async fn test_seeded_catalogue_scenario() {
    let system = start();
    let services = system.services();

    let all = services.query.resources(None).await.unwrap();
    assert_eq!(
        all,
        vec![
            Resource::new(1, "Compute Engine", "VM", "us-central1"),
            Resource::new(2, "Cloud Storage", "Storage", "europe-west1"),
        ]
    );

    let cloud = services.query.resources(Some("cloud")).await.unwrap();
    assert_eq!(ids(&cloud), vec!["2"]);

    let created = services
        .mutation
        .add_resource("Cloud SQL", "Database", "us-east1")
        .await
        .unwrap();
    assert_eq!(created, Resource::new(3, "Cloud SQL", "Database", "us-east1"));

    let cloud = services.query.resources(Some("CLOUD")).await.unwrap();
    assert_eq!(ids(&cloud), vec!["2", "3"]);

    let none = services.query.resources(Some("zzz")).await.unwrap();
    assert!(none.is_empty());

    drop(services);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_strings_are_accepted() {
    let system = ResourceSystem::start(StoreSettings::default(), Vec::new()).unwrap();
    let created = system.mutation().add_resource("", "", "").await.unwrap();
    assert_eq!(created, Resource::new(1, "", "", ""));

    // An empty filter is the same as no filter.
    let listed = system.query().resources(Some("")).await.unwrap();
    assert_eq!(listed, vec![created]);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_sequential_ids_follow_count() {
    let system = start();
    let mutation = system.mutation();

    for expected in 3..=10 {
        let created = mutation.add_resource("r", "t", "g").await.unwrap();
        assert_eq!(created.id.to_string(), expected.to_string());
    }
    assert_eq!(system.store().count().await.unwrap(), 10);

    drop(mutation);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let system = start();

    let tasks: Vec<_> = (0..50)
        .map(|i| {
            let mutation = system.mutation();
            tokio::spawn(async move {
                mutation
                    .add_resource(format!("svc-{i}"), "VM", "us-central1")
                    .await
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for task in tasks {
        let created = task.await.unwrap().unwrap();
        assert!(seen.insert(created.id), "duplicate id {}", created.id);
    }

    let all = system.query().resources(None).await.unwrap();
    assert_eq!(all.len(), 52);
    let expected: Vec<String> = (1..=52).map(|n| n.to_string()).collect();
    assert_eq!(ids(&all), expected);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_filter_returns_exactly_matching_names_in_order() {
    let system = ResourceSystem::start(StoreSettings::default(), Vec::new()).unwrap();
    let mutation = system.mutation();
    for name in ["Alpha", "beta", "ALPHABET", "gamma", "alphanumeric"] {
        mutation.add_resource(name, "t", "r").await.unwrap();
    }

    let query = system.query();
    let all = query.resources(None).await.unwrap();
    let matched = query.resources(Some("aLpHa")).await.unwrap();

    let expected: Vec<_> = all
        .iter()
        .filter(|r| r.name.to_lowercase().contains("alpha"))
        .cloned()
        .collect();
    assert_eq!(matched, expected);
    assert_eq!(ids(&matched), vec!["1", "3", "5"]);

    // Reads do not change the store.
    assert_eq!(query.resources(None).await.unwrap(), all);

    drop((mutation, query));
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_listener_sees_event_after_record_is_visible() {
    let system = start();
    let mut feed = system.subscription().resource_added();

    let created = system
        .mutation()
        .add_resource("Pub/Sub", "Messaging", "asia-east1")
        .await
        .unwrap();

    let event = timeout(WAIT, feed.next()).await.unwrap().unwrap();
    assert_eq!(event, created);

    let listed = system.query().resources(Some("pub/sub")).await.unwrap();
    assert_eq!(listed, vec![event]);

    drop(feed);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_every_listener_gets_every_event_in_order() {
    let system = start();
    let mut first = system.subscription().resource_added();
    let mut second = system.subscription().resource_added();

    let tasks: Vec<_> = (0..10)
        .map(|i| {
            let mutation = system.mutation();
            tokio::spawn(async move { mutation.add_resource(format!("n{i}"), "t", "r").await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    for feed in [&mut first, &mut second] {
        let mut received = Vec::new();
        for _ in 0..10 {
            let event = timeout(WAIT, feed.next()).await.unwrap().unwrap();
            received.push(event.id.0);
        }
        assert_eq!(received, (3..=12).collect::<Vec<_>>());
    }

    drop((first, second));
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_late_listener_gets_no_replay() {
    let system = start();
    let mutation = system.mutation();
    mutation.add_resource("before", "t", "r").await.unwrap();

    let mut feed = system.subscription().resource_added();
    let after = mutation.add_resource("after", "t", "r").await.unwrap();

    let event = timeout(WAIT, feed.next()).await.unwrap().unwrap();
    assert_eq!(event, after);

    drop((feed, mutation));
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_dropped_listener_is_deregistered() {
    let system = start();
    let subscription = system.subscription();

    let feed = subscription.resource_added();
    assert_eq!(subscription.listener_count(), 1);
    drop(feed);
    assert_eq!(subscription.listener_count(), 0);

    // Creating with nobody listening still succeeds.
    system.mutation().add_resource("x", "y", "z").await.unwrap();
    assert_eq!(system.events().published(), 1);

    drop(subscription);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_seed_records_are_not_published() {
    let seed = vec![ResourceCreate::new("Only", "One", "here")];
    let system = ResourceSystem::start(StoreSettings::default(), seed).unwrap();
    assert_eq!(system.events().published(), 0);
    assert_eq!(system.store().count().await.unwrap(), 1);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_feed_ends_after_shutdown() {
    let system = start();
    let mut feed = system.subscription().resource_added();
    system.shutdown().await.unwrap();

    assert!(timeout(WAIT, feed.next()).await.unwrap().is_none());
}
