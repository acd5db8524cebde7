use chrono::{Duration, Utc};
use tracing::info;

use crate::domain::models::class::FitnessClass;
use crate::domain::ports::ClassRepository;
use crate::error::AppError;

/// Inserts the sample catalog on first boot. A non-empty classes table means
/// the studio already has data and the seed is skipped entirely.
pub async fn seed_sample_classes(classes: &dyn ClassRepository) -> Result<(), AppError> {
    if classes.count().await? > 0 {
        return Ok(());
    }

    let samples = [
        ("Morning Yoga", "Priya Sharma", 20, Duration::days(1)),
        ("Evening Zumba", "Rahul Mehta", 15, Duration::days(1) + Duration::hours(12)),
        ("HIIT Training", "Arjun Singh", 12, Duration::days(2)),
        ("Power Yoga", "Sneha Patel", 18, Duration::days(3)),
    ];

    for (name, instructor, total_slots, offset) in samples {
        let class = FitnessClass::new(
            name,
            instructor,
            Utc::now() + offset,
            "Asia/Kolkata".to_string(),
            total_slots,
        );
        classes.create(&class).await?;
    }

    info!("Seeded {} sample classes", samples.len());
    Ok(())
}
