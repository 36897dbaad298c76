//! Flat CSV/TSV renderings of review pages and rating statistics.

use crate::domain::question::Question;
use crate::domain::review::Review;
use crate::domain::statistics::ProductStatistics;
use crate::utils::error::{ConversationsError, Result};
use csv::WriterBuilder;

fn write_rows<R>(delimiter: u8, header: &[&str], rows: R) -> Result<String>
where
    R: IntoIterator<Item = Vec<String>>,
{
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(&row)?;
    }
    let data = writer
        .into_inner()
        .map_err(|e| ConversationsError::Io(e.into_error()))?;
    Ok(String::from_utf8(data)?)
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn reviews_to_delimited(reviews: &[Review], delimiter: u8) -> Result<String> {
    let header = [
        "id",
        "product_id",
        "rating",
        "title",
        "user_nickname",
        "moderation_status",
        "submission_time",
        "photo_count",
    ];
    let rows = reviews.iter().map(|review| {
        vec![
            review.id.clone(),
            opt(review.product_id.as_deref()),
            review.rating.to_string(),
            opt(review.title.as_deref()),
            opt(review.user_nickname.as_deref()),
            opt(review.moderation_status.as_deref()),
            opt(review.submission_time.map(|t| t.to_rfc3339())),
            review.photos.len().to_string(),
        ]
    });
    write_rows(delimiter, &header, rows)
}

pub fn questions_to_delimited(questions: &[Question], delimiter: u8) -> Result<String> {
    let header = [
        "id",
        "product_id",
        "question_summary",
        "user_nickname",
        "moderation_status",
        "total_answer_count",
        "included_answers",
    ];
    let rows = questions.iter().map(|question| {
        vec![
            question.id.clone(),
            opt(question.product_id.as_deref()),
            opt(question.question_summary.as_deref()),
            opt(question.user_nickname.as_deref()),
            opt(question.moderation_status.as_deref()),
            question.total_answer_count.to_string(),
            question.answers.len().to_string(),
        ]
    });
    write_rows(delimiter, &header, rows)
}

pub fn ratings_to_delimited(stats: &[ProductStatistics], delimiter: u8) -> Result<String> {
    let header = [
        "product_id",
        "total_review_count",
        "average_overall_rating",
        "overall_rating_range",
        "native_total_review_count",
        "native_average_overall_rating",
    ];
    let rows = stats.iter().map(|entry| {
        let reviews = entry.review_statistics.as_ref();
        let native = entry.native_review_statistics.as_ref();
        vec![
            entry.product_id.clone(),
            opt(reviews.map(|s| s.total_review_count)),
            opt(reviews.and_then(|s| s.average_overall_rating)),
            opt(reviews.and_then(|s| s.overall_rating_range)),
            opt(native.map(|s| s.total_review_count)),
            opt(native.and_then(|s| s.average_overall_rating)),
        ]
    });
    write_rows(delimiter, &header, rows)
}
