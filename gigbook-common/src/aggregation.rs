//! Read-side aggregation over materialized rows
//!
//! These functions never touch the store; repository queries load rows and
//! hand them here so that ordering and boundary rules live in one place.

use chrono::{DateTime, Utc};

use crate::db::models::{ShowEntry, ShowPartition, VenueArea, VenueLocation, VenueSummary};

/// Group venues by exact (city, state)
///
/// Groups appear in the order their first member is seen; members keep
/// input order. Keys are compared byte-for-byte, no case folding.
pub fn group_by_area<I>(venues: I) -> Vec<VenueArea>
where
    I: IntoIterator<Item = VenueLocation>,
{
    let mut areas: Vec<VenueArea> = Vec::new();

    for venue in venues {
        let summary = VenueSummary {
            id: venue.id,
            name: venue.name,
        };

        match areas
            .iter_mut()
            .find(|area| area.city == venue.city && area.state == venue.state)
        {
            Some(area) => area.venues.push(summary),
            None => areas.push(VenueArea {
                city: venue.city,
                state: venue.state,
                venues: vec![summary],
            }),
        }
    }

    areas
}

/// Case-insensitive substring containment; an empty term matches everything
pub fn name_matches(term: &str, name: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

/// Split shows into past (`start_time < now`) and upcoming (`start_time >= now`)
///
/// Both halves are ordered by start time, ties broken by show id.
pub fn partition_shows(mut shows: Vec<ShowEntry>, now: DateTime<Utc>) -> ShowPartition {
    shows.sort_by(|a, b| {
        a.start_time
            .cmp(&b.start_time)
            .then_with(|| a.show_id.cmp(&b.show_id))
    });

    let (past_shows, upcoming_shows): (Vec<_>, Vec<_>) =
        shows.into_iter().partition(|show| show.start_time < now);

    ShowPartition {
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }
}
