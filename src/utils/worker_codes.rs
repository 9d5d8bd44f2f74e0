use anyhow::{Result, anyhow};
use autoscale_cuckoo_filter::CuckooFilter;
use futures::StreamExt;
use moka::future::Cache;
use sqlx::SqlitePool;
use std::sync::RwLock;
use std::time::Duration;

/// Expected capacity and false-positive rate.
/// Tune these based on real worker counts.
const FILTER_CAPACITY: usize = 100_000;
const FALSE_POSITIVE_RATE: f64 = 0.001;

const CACHE_CAPACITY: u64 = 50_000;
const CACHE_TTL: Duration = Duration::from_secs(86400);

#[inline]
fn normalize(code: &str) -> String {
    code.trim().to_lowercase()
}

/// Fast lookup of taken worker codes.
///
/// Filter says "absent" => code is free.
/// Cache says "taken"   => code is taken.
/// Otherwise the database decides.
pub struct WorkerCodeIndex {
    filter: RwLock<CuckooFilter<String>>,
    /// true => code is TAKEN
    cache: Cache<String, bool>,
}

impl Default for WorkerCodeIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkerCodeIndex {
    pub fn new() -> Self {
        Self {
            filter: RwLock::new(CuckooFilter::new(FILTER_CAPACITY, FALSE_POSITIVE_RATE)),
            cache: Cache::builder()
                .max_capacity(CACHE_CAPACITY)
                .time_to_live(CACHE_TTL)
                .build(),
        }
    }

    /// Check if a code might be taken (false positives possible)
    pub fn might_exist(&self, code: &str) -> bool {
        self.filter
            .read()
            .expect("worker code filter poisoned")
            .contains(&normalize(code))
    }

    /// Mark a single code as taken
    pub async fn insert(&self, code: &str) {
        let code = normalize(code);
        self.filter
            .write()
            .expect("worker code filter poisoned")
            .add(&code);
        self.cache.insert(code, true).await;
    }

    /// Forget a code after its worker is deleted.
    ///
    /// The code may never have been inserted, e.g. while warmup is still
    /// running. Removing an absent entry can drop a colliding fingerprint, which
    /// only turns a fast "taken" into a database check; the `UNIQUE` column
    /// still rejects real duplicates.
    pub async fn remove(&self, code: &str) {
        let code = normalize(code);
        self.filter
            .write()
            .expect("worker code filter poisoned")
            .remove(&code);
        self.cache.invalidate(&code).await;
    }

    /// true  => code AVAILABLE
    /// false => code TAKEN
    pub async fn is_available(&self, code: &str, pool: &SqlitePool) -> Result<bool, sqlx::Error> {
        let code = normalize(code);

        // 1. cuckoo filter, fast negative
        if !self.might_exist(&code) {
            return Ok(true);
        }

        // 2. cache, fast positive
        if self.cache.get(&code).await.unwrap_or(false) {
            return Ok(false);
        }

        // 3. database fallback
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM workers WHERE worker_id = ? LIMIT 1)",
        )
        .bind(&code)
        .fetch_one(pool)
        .await?;

        if exists {
            self.cache.insert(code, true).await;
        }

        Ok(!exists)
    }

    /// Load every existing code, streaming in batches
    pub async fn warmup(&self, pool: &SqlitePool, batch_size: usize) -> Result<usize> {
        let mut stream = sqlx::query_as::<_, (String,)>("SELECT worker_id FROM workers").fetch(pool);

        let mut batch = Vec::with_capacity(batch_size);
        let mut total = 0usize;

        while let Some(row) = stream.next().await {
            let (code,) = row.map_err(|e| anyhow!("DB row fetch failed: {}", e))?;

            batch.push(code);
            total += 1;

            if batch.len() >= batch_size {
                self.insert_batch(&batch).await;
                batch.clear();
            }
        }

        if !batch.is_empty() {
            self.insert_batch(&batch).await;
        }

        log::info!("Worker code index warmup complete: {} workers", total);
        Ok(total)
    }

    async fn insert_batch(&self, codes: &[String]) {
        let normalized: Vec<String> = codes.iter().map(|c| normalize(c)).collect();

        {
            let mut filter = self.filter.write().expect("worker code filter poisoned");
            for code in &normalized {
                filter.add(code);
            }
        }

        let futures: Vec<_> = normalized
            .into_iter()
            .map(|code| self.cache.insert(code, true))
            .collect();

        // Await all insertions concurrently
        futures::future::join_all(futures).await;
    }
}
