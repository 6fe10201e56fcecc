//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to build unique emails and tail numbers across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a pilot and an aircraft, the two rows every flight log entry references.
///
/// # Returns
/// - `Ok((pilot, aircraft))` - Created entities with default values
/// - `Err(DbErr)` - Database error during creation
pub async fn create_pilot_with_aircraft(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::aircraft::Model), DbErr> {
    let pilot = crate::factory::user::create_user(db).await?;
    let aircraft = crate::factory::aircraft::create_aircraft(db).await?;

    Ok((pilot, aircraft))
}
