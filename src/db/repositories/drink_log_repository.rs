use std::convert::TryFrom;

use chrono::NaiveDate;
use rusqlite::{named_params, Connection, OptionalExtension, Row};

use crate::error::{AppError, AppResult};
use crate::models::drink::{DrinkEvent, DrinkSource, DrinkType};

#[derive(Debug, Clone)]
pub struct DrinkLogRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub volume_ml: i64,
    pub hydration_score: f64,
    pub caffeine_mg: i64,
    pub drink_type: String,
    pub source: String,
    pub logged_at: String,
    pub date: String,
}

impl DrinkLogRow {
    pub fn from_event(event: &DrinkEvent) -> Self {
        Self {
            id: event.id.clone(),
            user_id: event.user_id.clone(),
            name: event.name.clone(),
            volume_ml: event.volume_ml,
            hydration_score: event.hydration_score,
            caffeine_mg: event.caffeine_mg,
            drink_type: event.drink_type.as_str().to_string(),
            source: event.source.as_str().to_string(),
            logged_at: event.logged_at.clone(),
            date: event.date.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn into_event(self) -> AppResult<DrinkEvent> {
        let drink_type =
            DrinkType::try_from(self.drink_type.as_str()).map_err(AppError::validation)?;
        let source = DrinkSource::try_from(self.source.as_str()).map_err(AppError::validation)?;
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|err| AppError::validation(format!("malformed date column: {err}")))?;

        Ok(DrinkEvent {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            volume_ml: self.volume_ml,
            hydration_score: self.hydration_score,
            caffeine_mg: self.caffeine_mg,
            drink_type,
            source,
            logged_at: self.logged_at,
            date,
        })
    }
}

impl TryFrom<&Row<'_>> for DrinkLogRow {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            name: row.get("name")?,
            volume_ml: row.get("volume_ml")?,
            hydration_score: row.get("hydration_score")?,
            caffeine_mg: row.get("caffeine_mg")?,
            drink_type: row.get("drink_type")?,
            source: row.get("source")?,
            logged_at: row.get("logged_at")?,
            date: row.get("date")?,
        })
    }
}

const SELECT_COLUMNS: &str = r#"
    id,
    user_id,
    name,
    volume_ml,
    hydration_score,
    caffeine_mg,
    drink_type,
    source,
    logged_at,
    date
"#;

pub struct DrinkLogRepository;

impl DrinkLogRepository {
    pub fn insert(conn: &Connection, event: &DrinkEvent) -> AppResult<()> {
        let row = DrinkLogRow::from_event(event);

        conn.execute(
            r#"
                INSERT INTO drinks_log (
                    id,
                    user_id,
                    name,
                    volume_ml,
                    hydration_score,
                    caffeine_mg,
                    drink_type,
                    source,
                    logged_at,
                    date
                ) VALUES (
                    :id,
                    :user_id,
                    :name,
                    :volume_ml,
                    :hydration_score,
                    :caffeine_mg,
                    :drink_type,
                    :source,
                    :logged_at,
                    :date
                )
            "#,
            named_params! {
                ":id": &row.id,
                ":user_id": &row.user_id,
                ":name": &row.name,
                ":volume_ml": &row.volume_ml,
                ":hydration_score": &row.hydration_score,
                ":caffeine_mg": &row.caffeine_mg,
                ":drink_type": &row.drink_type,
                ":source": &row.source,
                ":logged_at": &row.logged_at,
                ":date": &row.date,
            },
        )?;

        Ok(())
    }

    pub fn find_by_id(conn: &Connection, id: &str) -> AppResult<DrinkEvent> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM drinks_log WHERE id = :id"
        ))?;

        let row = stmt
            .query_row(named_params! {":id": id}, |row| DrinkLogRow::try_from(row))
            .optional()?;

        match row {
            Some(row) => row.into_event(),
            None => Err(AppError::not_found()),
        }
    }

    /// All of a user's entries for one calendar date, newest first.
    pub fn list_for_date(
        conn: &Connection,
        user_id: &str,
        date: NaiveDate,
    ) -> AppResult<Vec<DrinkEvent>> {
        let mut stmt = conn.prepare(&format!(
            r#"
                SELECT {SELECT_COLUMNS}
                FROM drinks_log
                WHERE user_id = :user_id AND date = :date
                ORDER BY logged_at DESC
            "#
        ))?;

        let events = stmt
            .query_map(
                named_params! {
                    ":user_id": user_id,
                    ":date": date.format("%Y-%m-%d").to_string(),
                },
                |row| DrinkLogRow::try_from(row),
            )?
            .map(|row| row.map_err(AppError::from).and_then(|row| row.into_event()))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(events)
    }

    /// Entries between two dates, inclusive, oldest day first.
    pub fn list_between(
        conn: &Connection,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<DrinkEvent>> {
        let mut stmt = conn.prepare(&format!(
            r#"
                SELECT {SELECT_COLUMNS}
                FROM drinks_log
                WHERE user_id = :user_id AND date >= :from AND date <= :to
                ORDER BY date ASC, logged_at ASC
            "#
        ))?;

        let events = stmt
            .query_map(
                named_params! {
                    ":user_id": user_id,
                    ":from": from.format("%Y-%m-%d").to_string(),
                    ":to": to.format("%Y-%m-%d").to_string(),
                },
                |row| DrinkLogRow::try_from(row),
            )?
            .map(|row| row.map_err(AppError::from).and_then(|row| row.into_event()))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(events)
    }
}
