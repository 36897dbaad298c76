#![allow(dead_code)]

use bvsdk_conversations::{ClientConfig, ConversationsClient};
use httpmock::MockServer;
use serde_json::{json, Map, Value};

pub const PASSKEY: &str = "kuy3zj9pr3n7i0wxajrzj04xo";

pub const PRODUCT_DESCRIPTION: &str = "Our pinpoint oxford is crafted from only the finest 80's two-ply cotton fibers.Single-needle stitching on all seams for a smooth flat appearance. Tailored with our Traditional\n                straight collar and button cuffs. Machine wash. Imported.";

pub const REVIEW_TEXT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed rhoncus scelerisque semper. Morbi in sapien sit amet justo eleifend pellentesque! Cras sollicitudin, quam in ullamcorper faucibus, augue metus blandit justo, vitae ullamcorper tellus quam non purus. Fusce gravida rhoncus placerat. Integer tempus nunc sed elit mollis ut venenatis felis volutpat. Sed a velit et lacus lobortis aliquet? Donec dolor quam, pharetra vitae commodo et, mattis quis nibh? Quisque ultrices neque et lacus volutpat.";

pub const PHOTO_CAPTION: &str = "Etiam malesuada ultricies urna in scelerisque. Sed viverra blandit nibh non egestas. Sed rhoncus, ipsum in vehicula imperdiet, purus lectus sodales erat, eget ornare lacus lectus ac leo. Suspendisse tristique sollicitudin ultricies. Aliquam erat volutpat.";

pub fn client_for(server: &MockServer) -> ConversationsClient {
    let config = ClientConfig::new("apitestcustomer", PASSKEY)
        .staging(true)
        .with_base_url(server.url("/data/"));
    ConversationsClient::new(&config).expect("client should build")
}

pub fn envelope(limit: u32, total: u32, results: Vec<Value>, includes: Value) -> Value {
    json!({
        "Limit": limit,
        "Offset": 0,
        "TotalResults": total,
        "Locale": "en_US",
        "HasErrors": false,
        "Errors": [],
        "Results": results,
        "Includes": includes
    })
}

/// The first review of the `HasPhotos` page for `test1`.
pub fn fixture_review() -> Value {
    json!({
        "Id": "191975",
        "ProductId": "test1",
        "Rating": 1,
        "RatingRange": 5,
        "Title": "Morbi nibh risus, mattis id placerat a massa nunc.",
        "ReviewText": REVIEW_TEXT,
        "ModerationStatus": "APPROVED",
        "AuthorId": "endersgame",
        "UserNickname": "endersgame",
        "UserLocation": "San Fransisco, California",
        "IsRatingsOnly": false,
        "IsFeatured": false,
        "IsRecommended": null,
        "IsSyndicated": false,
        "ContentLocale": "en_US",
        "SubmissionTime": "2011-04-18T17:37:44.000-05:00",
        "LastModificationTime": "2016-06-21T20:30:40.000+00:00",
        "TotalCommentCount": 0,
        "TotalFeedbackCount": 0,
        "TotalPositiveFeedbackCount": 0,
        "TotalNegativeFeedbackCount": 0,
        "TagDimensionsOrder": ["Pro"],
        "TagDimensions": {
            "Pro": {"Id": "Pro", "Label": "Pros", "Values": ["Organic Fabric", "Quality"]}
        },
        "Photos": [{
            "Id": "72586",
            "Caption": PHOTO_CAPTION,
            "SizesOrder": ["thumbnail", "normal"],
            "Sizes": {
                "thumbnail": {
                    "Id": "thumbnail",
                    "Url": "https://reviews.apitestcustomer.bazaarvoice.com/bvstaging/5556/72586/photoThumb.jpg"
                },
                "normal": {
                    "Id": "normal",
                    "Url": "https://reviews.apitestcustomer.bazaarvoice.com/bvstaging/5556/72586/photo.jpg"
                }
            }
        }],
        "Videos": [],
        "ContextDataValuesOrder": ["Gender"],
        "ContextDataValues": {
            "Gender": {"Id": "Gender", "Value": "Female", "ValueLabel": "Female", "DimensionLabel": "Gender"}
        },
        "BadgesOrder": ["top10Contributor"],
        "Badges": {
            "top10Contributor": {"Id": "top10Contributor", "BadgeType": "Merit", "ContentType": "REVIEW"}
        },
        "SecondaryRatingsOrder": [],
        "SecondaryRatings": {},
        "ClientResponses": [],
        "CommentIds": []
    })
}

pub fn filler_review(id: u32, rating: u32) -> Value {
    json!({
        "Id": id.to_string(),
        "ProductId": "test1",
        "Rating": rating,
        "RatingRange": 5,
        "Title": format!("Review {}", id),
        "ReviewText": "Filler review text.",
        "ModerationStatus": "APPROVED",
        "AuthorId": format!("author{}", id),
        "UserNickname": format!("author{}", id),
        "IsRatingsOnly": false,
        "IsFeatured": false,
        "TagDimensions": {},
        "Photos": [{"Id": format!("p{}", id), "Caption": null, "Sizes": {}}],
        "ContextDataValues": {},
        "Badges": {}
    })
}

pub fn review_page() -> Value {
    let mut reviews = vec![fixture_review()];
    reviews.extend((1..10).map(|i| filler_review(200_000 + i, 1 + i % 5)));
    envelope(10, 42, reviews, json!({}))
}

pub fn fixture_question() -> Value {
    json!({
        "Id": "14828",
        "ProductId": "test1",
        "QuestionSummary": "Das ist mein test :)",
        "QuestionDetails": "Das ist mein test :)",
        "UserNickname": "123thisisme",
        "AuthorId": "eplz083100g",
        "ModerationStatus": "APPROVED",
        "IsFeatured": false,
        "AnswerIds": ["16292"],
        "TotalAnswerCount": 1,
        "SubmissionTime": "2014-01-20T16:03:52.000-06:00",
        "Photos": [],
        "Videos": [],
        "ContextDataValues": {},
        "Badges": {},
        "TagDimensions": {}
    })
}

pub fn fixture_answer() -> Value {
    json!({
        "Id": "16292",
        "QuestionId": "14828",
        "AnswerText": "zxnc,vznxc osaidmf oaismdfo ims adoifmaosidmfoiamsdfimasdf",
        "UserNickname": "asdfasdfasdfasdf",
        "AuthorId": "c6ryqeb2bq0",
        "ModerationStatus": "APPROVED",
        "IsBrandAnswer": false,
        "SubmissionTime": "2014-02-03T09:12:00.000-06:00",
        "Photos": [],
        "Badges": {}
    })
}

pub fn filler_question(id: u32) -> Value {
    let answer_id = format!("a{}", id);
    json!({
        "Id": id.to_string(),
        "ProductId": "test1",
        "QuestionSummary": format!("Question {}", id),
        "ModerationStatus": "APPROVED",
        "AnswerIds": [answer_id],
        "TotalAnswerCount": 1
    })
}

pub fn filler_answer(question_id: u32) -> Value {
    json!({
        "Id": format!("a{}", question_id),
        "QuestionId": question_id.to_string(),
        "AnswerText": "Filler answer.",
        "ModerationStatus": "APPROVED"
    })
}

pub fn question_page() -> Value {
    let mut questions = vec![fixture_question()];
    let mut answers = Map::new();
    answers.insert("16292".to_string(), fixture_answer());
    for id in 20_001..20_010 {
        questions.push(filler_question(id));
        answers.insert(format!("a{}", id), filler_answer(id));
    }
    envelope(
        10,
        57,
        questions,
        json!({ "Answers": Value::Object(answers), "AnswersOrder": [] }),
    )
}

pub fn product_page() -> Value {
    let review_ids: Vec<String> = (1..=10).map(|i| format!("r{}", i)).collect();
    let question_ids: Vec<String> = (1..=5).map(|i| format!("q{}", i)).collect();

    let mut reviews = Map::new();
    for (i, id) in review_ids.iter().enumerate() {
        let mut review = filler_review(i as u32, 5);
        review["Id"] = json!(id);
        reviews.insert(id.clone(), review);
    }

    let mut questions = Map::new();
    for (i, id) in question_ids.iter().enumerate() {
        let mut question = filler_question(i as u32);
        question["Id"] = json!(id);
        question["AnswerIds"] = json!([]);
        questions.insert(id.clone(), question);
    }

    let product = json!({
        "Id": "test1",
        "Name": "Dress Shirt",
        "Description": PRODUCT_DESCRIPTION,
        "Brand": {"Id": "cskg0snv1x3chrqlde0zklodb", "Name": "mysh"},
        "BrandExternalId": "cskg0snv1x3chrqlde0zklodb",
        "ImageUrl": "http://myshco.com/productImages/shirt.jpg",
        "ProductPageUrl": "http://myshco.com/product/test1",
        "CategoryId": "testCategory1031",
        "EANs": [],
        "UPCs": [],
        "ModelNumbers": [],
        "ManufacturerPartNumbers": [],
        "ISBNs": [],
        "Active": true,
        "Disabled": false,
        "ReviewIds": review_ids,
        "QuestionIds": question_ids,
        "ReviewStatistics": {
            "AverageOverallRating": 3.4,
            "TotalReviewCount": 89,
            "OverallRatingRange": 5,
            "RatingDistribution": [{"RatingValue": 5, "Count": 30}],
            "RecommendedCount": 20,
            "NotRecommendedCount": 5,
            "SecondaryRatingsAverages": {},
            "FirstSubmissionTime": "2011-04-18T17:37:44.000-05:00",
            "LastSubmissionTime": null
        }
    });

    envelope(
        10,
        1,
        vec![product],
        json!({
            "Reviews": Value::Object(reviews),
            "Questions": Value::Object(questions)
        }),
    )
}

pub fn product_statistics(product_id: &str, total: u32) -> Value {
    let stats = json!({
        "AverageOverallRating": 4.0344827586,
        "TotalReviewCount": total,
        "OverallRatingRange": 5
    });
    json!({
        "ProductStatistics": {
            "ProductId": product_id,
            "ReviewStatistics": stats,
            "NativeReviewStatistics": stats
        }
    })
}
