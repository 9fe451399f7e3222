//! Reservation Repository

use super::{RepoError, RepoResult};
use shared::models::{Reservation, ReservationCreate, ReservationStatus};
use shared::util::now_millis;
use sqlx::SqlitePool;

const RESERVATION_SELECT: &str = "SELECT id, email, name, phone, date, time, guests, note, status, created_at FROM reservation";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Reservation>> {
    let rows = sqlx::query_as::<_, Reservation>(&format!(
        "{RESERVATION_SELECT} ORDER BY date, time"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Vec<Reservation>> {
    let rows = sqlx::query_as::<_, Reservation>(&format!(
        "{RESERVATION_SELECT} WHERE email = ? ORDER BY date, time"
    ))
    .bind(email)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Reservation>> {
    let row = sqlx::query_as::<_, Reservation>(&format!("{RESERVATION_SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: ReservationCreate) -> RepoResult<i64> {
    if data.guests < 1 {
        return Err(RepoError::Validation("guests must be at least 1".into()));
    }
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO reservation (email, name, phone, date, time, guests, note, status, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.email)
    .bind(&data.name)
    .bind(&data.phone)
    .bind(&data.date)
    .bind(&data.time)
    .bind(data.guests)
    .bind(&data.note)
    .bind(ReservationStatus::Pending)
    .bind(now_millis())
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn update_status(
    pool: &SqlitePool,
    id: i64,
    status: ReservationStatus,
) -> RepoResult<u64> {
    let rows = sqlx::query("UPDATE reservation SET status = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn booking(email: &str, date: &str) -> ReservationCreate {
        ReservationCreate {
            email: email.into(),
            name: None,
            phone: Some("555-0100".into()),
            date: date.into(),
            time: "19:30".into(),
            guests: 4,
            note: None,
        }
    }

    #[tokio::test]
    async fn new_booking_is_pending_and_status_can_change() {
        let pool = test_pool().await;
        let id = create(&pool, booking("a@x.com", "2026-11-02")).await.unwrap();

        let r = find_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(r.status, ReservationStatus::Pending);

        assert_eq!(
            update_status(&pool, id, ReservationStatus::Confirmed)
                .await
                .unwrap(),
            1
        );
        let r = find_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(r.status, ReservationStatus::Confirmed);
    }

    #[tokio::test]
    async fn owner_listing_vs_full_listing() {
        let pool = test_pool().await;
        create(&pool, booking("a@x.com", "2026-11-02")).await.unwrap();
        create(&pool, booking("b@x.com", "2026-11-01")).await.unwrap();

        assert_eq!(find_by_email(&pool, "a@x.com").await.unwrap().len(), 1);
        let all = find_all(&pool).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].date, "2026-11-01");
    }

    #[tokio::test]
    async fn zero_guests_rejected() {
        let pool = test_pool().await;
        let mut b = booking("a@x.com", "2026-11-02");
        b.guests = 0;
        assert!(matches!(
            create(&pool, b).await,
            Err(RepoError::Validation(_))
        ));
    }
}
