use crate::core::calculator::neighbors::CandidateAssessment;
use crate::core::calculator::travel::TravelPolicy;
use crate::core::check::CheckLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_lesson;
use crate::errors::AppResult;
use crate::models::lesson::Lesson;
use crate::ui::messages::{success, warning};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Book `lesson`. The travel check runs first and is reported, but a
    /// conflict never prevents the booking.
    pub fn apply(
        pool: &mut DbPool,
        lesson: &Lesson,
        policy: &TravelPolicy,
    ) -> AppResult<(i64, CandidateAssessment)> {
        //
        // 1️⃣ Check against the existing book
        //
        let assessment = CheckLogic::assess(pool, lesson, policy)?;
        CheckLogic::print(lesson, &assessment);

        //
        // 2️⃣ Insert
        //
        let id = insert_lesson(&pool.conn, lesson)?;

        success(format!(
            "Lesson #{} booked on {} {}–{}",
            id,
            lesson.date_str(),
            lesson.start_str(),
            lesson.end_str()
        ));

        if assessment.has_issue() || assessment.has_overlap() {
            warning("Booked anyway: review the schedule around this lesson.");
        }

        //
        // 3️⃣ Internal log (non bloccante)
        //
        if let Err(e) = ttlog(
            &pool.conn,
            "add",
            &format!("#{id}"),
            &format!(
                "{} {}-{} {} [{}]",
                lesson.date_str(),
                lesson.start_str(),
                lesson.end_str(),
                lesson.student_label(),
                assessment.worst_status().as_str()
            ),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok((id, assessment))
    }
}
