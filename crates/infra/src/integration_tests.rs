//! Integration tests for repositories shared across threads.
//!
//! Verifies:
//! - Concurrent adds with distinct ids are never lost
//! - Concurrent updates to one key always leave a complete product behind
//! - Readers running next to writers only ever see whole products
//! - Callers can hold the backend as `Arc<dyn ProductRepository>`

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::{Arc, Barrier};
    use std::thread;

    use catalog_core::Context;
    use catalog_products::{CatalogError, Product, ProductId, ProductRepository};

    use crate::repository::InMemoryProductRepository;

    const THREADS: usize = 8;
    const PER_THREAD: usize = 250;

    fn shared_repository() -> Arc<dyn ProductRepository> {
        catalog_observability::init();
        Arc::new(InMemoryProductRepository::new())
    }

    #[test]
    fn concurrent_adds_are_all_kept() {
        let repository = shared_repository();
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let repository = Arc::clone(&repository);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    let ctx = Context::background();
                    barrier.wait();
                    let mut ids = Vec::with_capacity(PER_THREAD);
                    for i in 0..PER_THREAD {
                        let product = Product::new(format!("t{t}-p{i}"), i as f64).unwrap();
                        ids.push(product.id_typed());
                        repository.add_product(&ctx, product).unwrap();
                    }
                    ids
                })
            })
            .collect();

        let mut expected = HashSet::new();
        for handle in handles {
            expected.extend(handle.join().unwrap());
        }

        let all = repository.get_all_products(&Context::background()).unwrap();
        assert_eq!(all.len(), THREADS * PER_THREAD);

        let stored: HashSet<ProductId> = all.iter().map(Product::id_typed).collect();
        assert_eq!(stored, expected);
    }

    #[test]
    fn racing_adds_of_one_product_admit_exactly_one() {
        let repository = shared_repository();
        let product = Product::new("contested", 1.0).unwrap();
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let repository = Arc::clone(&repository);
                let barrier = Arc::clone(&barrier);
                let product = product.clone();
                thread::spawn(move || {
                    barrier.wait();
                    repository.add_product(&Context::background(), product)
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let successes = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| *e == CatalogError::ProductAlreadyExists(product.id_typed())));
    }

    #[test]
    fn concurrent_updates_to_one_product_leave_a_whole_product() {
        let repository = shared_repository();
        let ctx = Context::background();
        let original = Product::new("v0", 0.0).unwrap();
        let id = original.id_typed();
        repository.add_product(&ctx, original.clone()).unwrap();

        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let repository = Arc::clone(&repository);
                let mut product = original.clone();
                thread::spawn(move || {
                    let ctx = Context::background();
                    for i in 0..PER_THREAD {
                        // name and price always move together
                        product.set_name(format!("{t}:{i}"));
                        product.set_price((t * PER_THREAD + i) as f64).unwrap();
                        repository.update_product(&ctx, product.clone()).unwrap();
                    }
                })
            })
            .collect();

        let reader = {
            let repository = Arc::clone(&repository);
            thread::spawn(move || {
                let ctx = Context::background();
                for _ in 0..PER_THREAD {
                    let seen = repository.get_product_by_id(&ctx, id).unwrap();
                    assert_consistent(&seen);
                }
            })
        };

        for handle in handles {
            handle.join().unwrap();
        }
        reader.join().unwrap();

        let last = repository.get_product_by_id(&ctx, id).unwrap();
        assert_consistent(&last);
        assert_eq!(repository.get_all_products(&ctx).unwrap().len(), 1);
    }

    #[test]
    fn concurrent_removes_succeed_once_per_product() {
        let repository = shared_repository();
        let ctx = Context::background();
        let ids: Vec<ProductId> = (0..PER_THREAD)
            .map(|i| {
                let product = Product::new(format!("p{i}"), 1.0).unwrap();
                let id = product.id_typed();
                repository.add_product(&ctx, product).unwrap();
                id
            })
            .collect();
        let ids = Arc::new(ids);

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let repository = Arc::clone(&repository);
                let ids = Arc::clone(&ids);
                thread::spawn(move || {
                    let ctx = Context::background();
                    ids.iter()
                        .filter(|id| repository.remove_product(&ctx, **id).is_ok())
                        .count()
                })
            })
            .collect();

        let removed: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(removed, PER_THREAD);
        assert!(repository.get_all_products(&ctx).unwrap().is_empty());
    }

    #[test]
    fn boxed_backend_is_interchangeable() {
        let repository: Box<dyn ProductRepository> = Box::new(InMemoryProductRepository::new());
        let ctx = Context::background();
        let product = Product::new("boxed", 4.0).unwrap();

        repository.add_product(&ctx, product.clone()).unwrap();
        assert_eq!(repository.get_product_by_id(&ctx, product.id_typed()).unwrap(), product);
    }

    fn assert_consistent(product: &Product) {
        if product.name() == "v0" {
            assert_eq!(product.price(), 0.0);
            return;
        }
        let (t, i) = product.name().split_once(':').unwrap();
        let t: usize = t.parse().unwrap();
        let i: usize = i.parse().unwrap();
        assert_eq!(product.price(), (t * PER_THREAD + i) as f64);
    }
}
