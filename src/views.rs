//! Read-only selectors the screens render from

use chrono::{DateTime, Datelike, Duration, Utc};

use crate::models::{
    AttendanceSession, AttendanceStatus, ClassRoom, GradeSession, GradeStatus, HomeworkPost,
    ScheduleSlot, SchoolDay, Student,
};
use crate::store::Store;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GradeStats {
    pub average: f64,
    pub highest: f64,
    pub lowest: f64,
    pub filled: usize,
    pub total: usize,
}

/// Stats over the entered grades; zero and unparseable entries count as not filled
pub fn grade_stats(values: &[f64]) -> GradeStats {
    let entered: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan() && *v > 0.0).collect();
    let filled = entered.len();
    if filled == 0 {
        return GradeStats { total: values.len(), ..Default::default() };
    }
    GradeStats {
        average: entered.iter().sum::<f64>() / filled as f64,
        highest: entered.iter().copied().fold(f64::MIN, f64::max),
        lowest: entered.iter().copied().fold(f64::MAX, f64::min),
        filled,
        total: values.len(),
    }
}

pub fn session_stats(session: &GradeSession) -> GradeStats {
    let values: Vec<f64> = session.grades.iter().map(|g| g.value).collect();
    grade_stats(&values)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttendanceCounts {
    pub present: usize,
    pub absent: usize,
    pub late: usize,
}

pub fn attendance_counts(session: &AttendanceSession) -> AttendanceCounts {
    session
        .records
        .iter()
        .fold(AttendanceCounts::default(), |mut acc, r| {
            match r.status {
                AttendanceStatus::Present => acc.present += 1,
                AttendanceStatus::Absent => acc.absent += 1,
                AttendanceStatus::Late => acc.late += 1,
            }
            acc
        })
}

/// `None` means every status
pub fn sessions_by_status(store: &Store, status: Option<GradeStatus>) -> Vec<&GradeSession> {
    store
        .grade_sessions()
        .iter()
        .filter(|s| status.map_or(true, |wanted| s.status == wanted))
        .collect()
}

pub fn students_in_class<'a>(store: &'a Store, class_id: &str) -> Vec<&'a Student> {
    store.students().iter().filter(|s| s.class_id == class_id).collect()
}

/// Case-insensitive match on full name or class name
pub fn search_students<'a>(store: &'a Store, query: &str) -> Vec<&'a Student> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return store.students().iter().collect();
    }
    store
        .students()
        .iter()
        .filter(|s| {
            s.full_name().to_lowercase().contains(&query)
                || s.class_name.to_lowercase().contains(&query)
        })
        .collect()
}

pub fn draft_session_count(store: &Store) -> usize {
    store
        .grade_sessions()
        .iter()
        .filter(|s| s.status == GradeStatus::Draft)
        .count()
}

/// Uncorrected homework already due or due within `window_days`
pub fn homework_to_correct(store: &Store, now: DateTime<Utc>, window_days: i64) -> Vec<&HomeworkPost> {
    let cutoff = now + Duration::days(window_days);
    store
        .homework()
        .iter()
        .filter(|hw| !hw.is_corrected && hw.due_date <= cutoff)
        .collect()
}

/// The latest attendance session recorded for a class
pub fn attendance_for_class<'a>(store: &'a Store, class_id: &str) -> Option<&'a AttendanceSession> {
    store.attendance_sessions().iter().find(|s| s.class_id == class_id)
}

/// Roll-call sheet for a class on a given calendar day
pub fn attendance_on<'a>(
    store: &'a Store,
    class_id: &str,
    date: DateTime<Utc>,
) -> Option<&'a AttendanceSession> {
    store
        .attendance_sessions()
        .iter()
        .find(|s| s.class_id == class_id && s.date.date_naive() == date.date_naive())
}

/// First schedule slot of the class on the given date
pub fn slot_on(class: &ClassRoom, date: DateTime<Utc>) -> Option<&ScheduleSlot> {
    let day = SchoolDay::from_weekday(date.weekday())?;
    class.schedule.iter().find(|s| s.day == day)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradeBand {
    Good,
    Average,
    Weak,
}

/// >= 70% good, >= 50% average, below that weak
pub fn grade_band(value: f64, max: u8) -> GradeBand {
    let ratio = value / f64::from(max);
    if ratio >= 0.7 {
        GradeBand::Good
    } else if ratio >= 0.5 {
        GradeBand::Average
    } else {
        GradeBand::Weak
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_grade_stats_ignore_blank_entries() {
        let stats = grade_stats(&[16.0, 0.0, 8.0, f64::NAN, 12.0]);
        assert_eq!(stats.filled, 3);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.average, 12.0);
        assert_eq!(stats.highest, 16.0);
        assert_eq!(stats.lowest, 8.0);

        let empty = grade_stats(&[0.0, 0.0]);
        assert_eq!(empty, GradeStats { total: 2, ..Default::default() });
    }

    #[test]
    fn test_seed_views() {
        let store = Store::default();
        assert_eq!(students_in_class(&store, "C2").len(), 5);
        assert_eq!(draft_session_count(&store), 1);
        assert_eq!(sessions_by_status(&store, None).len(), 3);
        assert_eq!(sessions_by_status(&store, Some(GradeStatus::Published))[0].id, "GS1");

        let stats = session_stats(store.grade_sessions().get("GS2").unwrap());
        assert_eq!(stats.filled, 5);
        assert_eq!(stats.highest, 19.0);

        let counts = attendance_counts(attendance_for_class(&store, "C1").unwrap());
        assert_eq!(counts, AttendanceCounts { present: 15, absent: 0, late: 0 });
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let store = Store::default();
        let hits = search_students(&store, "  BENALI ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "ST01");
        assert_eq!(search_students(&store, "5ème").len(), 5);
        assert_eq!(search_students(&store, "").len(), 25);
    }

    #[test]
    fn test_homework_to_correct_window() {
        let store = Store::default();
        let ids: Vec<&str> = homework_to_correct(&store, Utc::now(), 3)
            .into_iter()
            .map(|h| h.id.as_str())
            .collect();
        // HW1 due in 2 days; HW3 is overdue but already corrected
        assert_eq!(ids, vec!["HW1"]);
    }

    #[test]
    fn test_slot_on_weekday() {
        let store = Store::default();
        let class = store.classes().get("C1").unwrap();
        // 2026-10-18 is a Sunday
        let sunday = Utc.with_ymd_and_hms(2026, 10, 18, 7, 0, 0).unwrap();
        assert_eq!(slot_on(class, sunday).unwrap().label(), "08:00 – 09:30");
        let friday = Utc.with_ymd_and_hms(2026, 10, 16, 7, 0, 0).unwrap();
        assert!(slot_on(class, friday).is_none());
    }

    #[test]
    fn test_attendance_on_matches_calendar_day() {
        let store = Store::default();
        let now = Utc::now();
        assert_eq!(attendance_on(&store, "C1", now).unwrap().id, "AS1");
        assert!(attendance_on(&store, "C2", now).is_none());
        assert!(attendance_on(&store, "C1", now - Duration::days(1)).is_none());
    }

    #[test]
    fn test_grade_bands() {
        assert_eq!(grade_band(14.0, 20), GradeBand::Good);
        assert_eq!(grade_band(10.0, 20), GradeBand::Average);
        assert_eq!(grade_band(9.5, 20), GradeBand::Weak);
        assert_eq!(grade_band(7.0, 10), GradeBand::Good);
    }
}
