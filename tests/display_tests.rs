mod common;

use bvsdk_conversations::{
    BadgeType, BulkRatingsFilter, BulkRatingsRequest, BulkRatingsStats, ConversationsError,
    FilterOperator, ProductContent, ProductDisplayPageRequest, QuestionFilter,
    QuestionsAndAnswersRequest, ReviewFilter, ReviewSort, ReviewsRequest, SortOrder, StatsType,
};
use common::*;
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_product_display() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/data/products.json")
                .query_param("apiversion", "5.4")
                .query_param("passkey", PASSKEY)
                .query_param("Filter", "Id:eq:test1")
                .query_param("Include", "Reviews,Questions")
                .query_param("Limit_Reviews", "10")
                .query_param("Limit_Questions", "5")
                .query_param("Stats", "Reviews");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(product_page());
        })
        .await;

    let request = ProductDisplayPageRequest::new("test1")
        .include_content(ProductContent::Reviews, 10)
        .include_content(ProductContent::Reviews, 10)
        .include_content(ProductContent::Questions, 5)
        .include_statistics(StatsType::Reviews);

    let response = client_for(&server).load(&request).await.unwrap();
    api_mock.assert_async().await;

    let product = response.result.expect("product should be present");
    let brand = product.brand.as_ref().unwrap();
    assert_eq!(brand.id, "cskg0snv1x3chrqlde0zklodb");
    assert_eq!(brand.name.as_deref(), Some("mysh"));
    assert_eq!(product.description.as_deref(), Some(PRODUCT_DESCRIPTION));
    assert_eq!(product.brand_external_id.as_deref(), Some("cskg0snv1x3chrqlde0zklodb"));
    assert_eq!(
        product.image_url.as_deref(),
        Some("http://myshco.com/productImages/shirt.jpg")
    );
    assert_eq!(product.name.as_deref(), Some("Dress Shirt"));
    assert_eq!(product.category_id.as_deref(), Some("testCategory1031"));
    assert_eq!(product.id, "test1");
    assert_eq!(product.included_reviews.len(), 10);
    assert_eq!(product.included_questions.len(), 5);
    assert_eq!(product.included_reviews[0].id, "r1");
    assert_eq!(product.included_questions[4].id, "q5");

    let stats = product.review_statistics.unwrap();
    assert_eq!(stats.total_review_count, 89);
    assert_eq!(stats.recommended_ratio(), Some(0.8));
    assert!(stats.last_submission_time.is_none());
}

#[tokio::test]
async fn test_review_display() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/data/reviews.json")
                .query_param("Filter", "ProductId:eq:test1")
                .query_param("Filter", "HasPhotos:eq:true")
                .query_param("Filter", "HasComments:eq:false")
                .query_param("Sort", "Rating:asc")
                .query_param("Limit", "10")
                .query_param("Offset", "0");
            then.status(200).json_body(review_page());
        })
        .await;

    let request = ReviewsRequest::new("test1", 10, 0)
        .add_sort(ReviewSort::Rating, SortOrder::Ascending)
        .add_filter(ReviewFilter::HasPhotos, FilterOperator::EqualTo, "true")
        .add_filter(ReviewFilter::HasComments, FilterOperator::EqualTo, "false");

    let response = client_for(&server).load(&request).await.unwrap();
    api_mock.assert_async().await;

    assert_eq!(response.results.len(), 10);
    assert_eq!(response.total_results, Some(42));

    let review = &response.results[0];
    assert_eq!(review.rating, 1);
    assert_eq!(
        review.title.as_deref(),
        Some("Morbi nibh risus, mattis id placerat a massa nunc.")
    );
    assert_eq!(review.review_text.as_deref(), Some(REVIEW_TEXT));
    assert_eq!(review.moderation_status.as_deref(), Some("APPROVED"));
    assert_eq!(review.id, "191975");
    assert!(review.product.is_none());
    assert!(!review.is_ratings_only);
    assert!(!review.is_featured);
    assert_eq!(review.product_id.as_deref(), Some("test1"));
    assert_eq!(review.author_id.as_deref(), Some("endersgame"));
    assert_eq!(review.user_nickname.as_deref(), Some("endersgame"));
    assert_eq!(review.user_location.as_deref(), Some("San Fransisco, California"));

    let pro = review.tag_dimension("Pro").unwrap();
    assert_eq!(pro.label.as_deref(), Some("Pros"));
    assert_eq!(pro.id, "Pro");
    assert_eq!(pro.values, vec!["Organic Fabric", "Quality"]);

    assert_eq!(review.photos.len(), 1);
    let photo = &review.photos[0];
    assert_eq!(photo.caption.as_deref(), Some(PHOTO_CAPTION));
    assert_eq!(photo.id, "72586");
    assert_eq!(
        photo.thumbnail_url(),
        Some("https://reviews.apitestcustomer.bazaarvoice.com/bvstaging/5556/72586/photoThumb.jpg")
    );
    assert_eq!(
        photo.normal_url(),
        Some("https://reviews.apitestcustomer.bazaarvoice.com/bvstaging/5556/72586/photo.jpg")
    );

    assert_eq!(review.context_data_values.len(), 1);
    let cdv = &review.context_data_values[0];
    assert_eq!(cdv.value.as_deref(), Some("Female"));
    assert_eq!(cdv.value_label.as_deref(), Some("Female"));
    assert_eq!(cdv.dimension_label.as_deref(), Some("Gender"));
    assert_eq!(cdv.id, "Gender");

    let badge = &review.badges[0];
    assert_eq!(badge.badge_type, BadgeType::Merit);
    assert_eq!(badge.id, "top10Contributor");
    assert_eq!(badge.content_type.as_deref(), Some("REVIEW"));

    for review in &response.results {
        assert_eq!(review.product_id.as_deref(), Some("test1"));
    }
}

#[tokio::test]
async fn test_question_display() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/data/questions.json")
                .query_param("Filter", "ProductId:eq:test1")
                .query_param("Filter", "HasAnswers:eq:true")
                .query_param("Include", "Answers")
                .query_param("Limit", "10")
                .query_param("Offset", "0");
            then.status(200).json_body(question_page());
        })
        .await;

    let request = QuestionsAndAnswersRequest::new("test1", 10, 0).add_filter(
        QuestionFilter::HasAnswers,
        FilterOperator::EqualTo,
        "true",
    );

    let response = client_for(&server).load(&request).await.unwrap();
    api_mock.assert_async().await;

    assert_eq!(response.results.len(), 10);

    let question = &response.results[0];
    assert_eq!(question.question_summary.as_deref(), Some("Das ist mein test :)"));
    assert_eq!(question.question_details.as_deref(), Some("Das ist mein test :)"));
    assert_eq!(question.user_nickname.as_deref(), Some("123thisisme"));
    assert_eq!(question.author_id.as_deref(), Some("eplz083100g"));
    assert_eq!(question.moderation_status.as_deref(), Some("APPROVED"));
    assert_eq!(question.id, "14828");

    assert_eq!(question.answers.len(), 1);
    let answer = &question.answers[0];
    assert_eq!(answer.user_nickname.as_deref(), Some("asdfasdfasdfasdf"));
    assert_eq!(answer.question_id.as_deref(), Some("14828"));
    assert_eq!(answer.author_id.as_deref(), Some("c6ryqeb2bq0"));
    assert_eq!(answer.moderation_status.as_deref(), Some("APPROVED"));
    assert_eq!(answer.id, "16292");
    assert_eq!(
        answer.answer_text.as_deref(),
        Some("zxnc,vznxc osaidmf oaismdfo ims adoifmaosidmfoiamsdfimasdf")
    );

    for question in &response.results {
        assert_eq!(question.product_id.as_deref(), Some("test1"));
        assert_eq!(question.answers.len(), 1);
    }
}

#[tokio::test]
async fn test_inline_ratings_one_product() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/data/statistics.json")
                .query_param("Filter", "ProductId:eq:test3")
                .query_param("Filter", "ContentLocale:eq:en_US")
                .query_param("Stats", "NativeReviews,Reviews");
            then.status(200).json_body(envelope(
                10,
                1,
                vec![product_statistics("test3", 29)],
                json!({}),
            ));
        })
        .await;

    let request = BulkRatingsRequest::new(["test3"], BulkRatingsStats::All).add_filter(
        BulkRatingsFilter::ContentLocale,
        FilterOperator::EqualTo,
        ["en_US"],
    );

    let response = client_for(&server).load(&request).await.unwrap();
    api_mock.assert_async().await;

    assert_eq!(response.results.len(), 1);
    let entry = &response.results[0];
    assert_eq!(entry.product_id, "test3");
    let reviews = entry.review_statistics.as_ref().unwrap();
    assert_eq!(reviews.total_review_count, 29);
    assert!(reviews.average_overall_rating.is_some());
    assert_eq!(reviews.overall_rating_range, Some(5));
    let native = entry.native_review_statistics.as_ref().unwrap();
    assert_eq!(native.total_review_count, 29);
    assert_eq!(native.overall_rating_range, Some(5));
}

#[tokio::test]
async fn test_inline_ratings_multiple_products() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/data/statistics.json")
                .query_param("Filter", "ProductId:eq:test1,test2,test3");
            then.status(200).json_body(envelope(
                10,
                3,
                vec![
                    product_statistics("test1", 89),
                    product_statistics("test2", 4),
                    product_statistics("test3", 29),
                ],
                json!({}),
            ));
        })
        .await;

    let request = BulkRatingsRequest::new(["test1", "test2", "test3"], BulkRatingsStats::All)
        .add_filter(
            BulkRatingsFilter::ContentLocale,
            FilterOperator::EqualTo,
            ["en_US"],
        );

    let response = client_for(&server).load(&request).await.unwrap();
    api_mock.assert_async().await;
    assert_eq!(response.results.len(), 3);
}

#[tokio::test]
async fn test_inline_ratings_too_many_products_error() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/data/statistics.json");
            then.status(200)
                .json_body(envelope(10, 0, vec![], json!({})));
        })
        .await;

    let too_many_product_ids: Vec<String> = (0..=110).map(|i| i.to_string()).collect();
    let request = BulkRatingsRequest::new(too_many_product_ids, BulkRatingsStats::All);

    let result = client_for(&server).load(&request).await;
    assert!(matches!(
        result,
        Err(ConversationsError::TooManyProducts { count: 111, max: 100 })
    ));
    api_mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_invalid_passkey_is_reported() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/data/reviews.json");
            then.status(200).json_body(json!({
                "Limit": 0,
                "Offset": 0,
                "TotalResults": 0,
                "Locale": null,
                "HasErrors": true,
                "Errors": [{"Message": "The passkey provided is invalid.", "Code": "ERROR_PARAM_INVALID_API_KEY"}],
                "Results": [],
                "Includes": {}
            }));
        })
        .await;

    let err = client_for(&server)
        .load(&ReviewsRequest::new("test1", 10, 0))
        .await
        .unwrap_err();
    assert_eq!(err.api_codes(), vec!["ERROR_PARAM_INVALID_API_KEY"]);
}

#[tokio::test]
async fn test_server_error_is_reported() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/data/questions.json");
            then.status(500).body("Internal Server Error");
        })
        .await;

    let err = client_for(&server)
        .load(&QuestionsAndAnswersRequest::new("test1", 10, 0))
        .await
        .unwrap_err();
    assert!(matches!(err, ConversationsError::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_reviews_with_included_products() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/data/reviews.json")
                .query_param("Include", "Products");
            then.status(200).json_body(envelope(
                10,
                1,
                vec![filler_review(5, 4)],
                json!({
                    "Products": {"test1": {"Id": "test1", "Name": "Dress Shirt"}},
                    "ProductsOrder": ["test1"]
                }),
            ));
        })
        .await;

    let response = client_for(&server)
        .load(&ReviewsRequest::new("test1", 10, 0).include_products())
        .await
        .unwrap();

    let product = response.results[0].product.as_ref().unwrap();
    assert_eq!(product.name.as_deref(), Some("Dress Shirt"));
}
