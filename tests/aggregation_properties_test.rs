use income_charts::domain::model::{
    CategoryRecord, CategorySummary, NumericValue, YearAmountRecord, YearTypeRecord,
    YearTypeSummary,
};
use income_charts::{
    Aggregator, CategoryShareAggregator, CumulativeYearAggregator, EtlError, YearTypeAggregator,
};

fn year_type(year: i64, kind: &str, amount: f64) -> YearTypeRecord {
    YearTypeRecord {
        year: NumericValue::from(year),
        kind: kind.to_string(),
        amount: NumericValue::from(amount),
    }
}

fn category(name: &str, amount: f64) -> CategoryRecord {
    CategoryRecord {
        category: name.to_string(),
        amount: NumericValue::from(amount),
    }
}

fn year_amount(year: i64, amount: f64) -> YearAmountRecord {
    YearAmountRecord {
        year: NumericValue::from(year),
        amount: NumericValue::from(amount),
    }
}

fn sorted_year_type(mut rows: Vec<YearTypeSummary>) -> Vec<YearTypeSummary> {
    rows.sort_by(|a, b| (a.year, &a.kind).cmp(&(b.year, &b.kind)));
    rows
}

fn sorted_categories(mut rows: Vec<CategorySummary>) -> Vec<CategorySummary> {
    rows.sort_by(|a, b| a.category.cmp(&b.category));
    rows
}

fn sample_year_type() -> Vec<YearTypeRecord> {
    vec![
        year_type(2018, "salary", 900.0),
        year_type(2019, "bonus", 120.0),
        year_type(2018, "salary", 100.0),
        year_type(2020, "refund", -40.0),
        year_type(2019, "bonus", 30.0),
        year_type(2018, "interest", 2.5),
    ]
}

fn sample_categories() -> Vec<CategoryRecord> {
    vec![
        category("food", 30.0),
        category("rent", 70.0),
        category("food", -10.0),
        category("travel", 0.0),
        category("fun", 12.5),
        category("rent", 17.5),
    ]
}

#[test]
fn test_year_type_is_order_independent() {
    let records = sample_year_type();
    let mut reversed = records.clone();
    reversed.reverse();
    let mut rotated = records.clone();
    rotated.rotate_left(2);

    let expected = sorted_year_type(YearTypeAggregator.aggregate(&records).unwrap());
    for permutation in [reversed, rotated] {
        let actual = sorted_year_type(YearTypeAggregator.aggregate(&permutation).unwrap());
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_category_share_is_order_independent() {
    let records = sample_categories();
    let mut reversed = records.clone();
    reversed.reverse();

    let expected = sorted_categories(CategoryShareAggregator.aggregate(&records).unwrap());
    let actual = sorted_categories(CategoryShareAggregator.aggregate(&reversed).unwrap());

    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(&expected) {
        assert_eq!(a.category, e.category);
        assert!((a.amount - e.amount).abs() < 1e-9);
        assert!((a.percent - e.percent).abs() < 1e-12);
    }
}

#[test]
fn test_year_type_conserves_the_total() {
    let records = sample_year_type();
    let input_total: f64 = records
        .iter()
        .map(|r| r.amount.parse_amount().unwrap())
        .sum();

    let rows = YearTypeAggregator.aggregate(&records).unwrap();
    let output_total: f64 = rows.iter().map(|r| r.amount).sum();

    assert!((input_total - output_total).abs() < 1e-9);
}

#[test]
fn test_category_percents_sum_to_one() {
    let rows = CategoryShareAggregator
        .aggregate(&sample_categories())
        .unwrap();

    let total: f64 = rows.iter().map(|r| r.percent).sum();
    assert!((total - 1.0).abs() < 1e-9);
    assert!(rows.iter().all(|r| r.amount > 0.0 && r.percent > 0.0));
    assert!(rows.iter().all(|r| r.category != "travel"));
}

#[test]
fn test_cumulative_years_are_contiguous() {
    let records = vec![
        year_amount(2012, 1.0),
        year_amount(2005, 2.0),
        year_amount(2009, -1.0),
    ];

    let points = CumulativeYearAggregator.aggregate(&records).unwrap();

    assert_eq!(points.len(), (2012 - 2005 + 1) as usize);
    for (offset, point) in points.iter().enumerate() {
        assert_eq!(point.year, 2005 + offset as i32);
    }
    assert_eq!(points.last().unwrap().value, 2.0);
}

#[test]
fn test_documented_examples() {
    let rows = YearTypeAggregator
        .aggregate(&[
            YearTypeRecord {
                year: NumericValue::from(2020i64),
                kind: "A".to_string(),
                amount: NumericValue::from("10"),
            },
            YearTypeRecord {
                year: NumericValue::from(2020i64),
                kind: "A".to_string(),
                amount: NumericValue::from("5"),
            },
            YearTypeRecord {
                year: NumericValue::from(2021i64),
                kind: "B".to_string(),
                amount: NumericValue::from("3"),
            },
        ])
        .unwrap();
    assert_eq!(
        sorted_year_type(rows),
        vec![
            YearTypeSummary {
                year: 2020,
                kind: "A".to_string(),
                amount: 15.0,
            },
            YearTypeSummary {
                year: 2021,
                kind: "B".to_string(),
                amount: 3.0,
            },
        ]
    );

    let shares = CategoryShareAggregator
        .aggregate(&[
            category("food", 30.0),
            category("food", -10.0),
            category("rent", 70.0),
        ])
        .unwrap();
    let shares: Vec<(String, f64, f64)> = sorted_categories(shares)
        .into_iter()
        .map(|r| (r.category, r.amount, r.percent))
        .collect();
    assert_eq!(
        shares,
        vec![
            ("food".to_string(), 30.0, 0.3),
            ("rent".to_string(), 70.0, 0.7),
        ]
    );

    let points = CumulativeYearAggregator
        .aggregate(&[year_amount(2019, 5.0), year_amount(2021, 3.0)])
        .unwrap();
    let points: Vec<(i32, f64)> = points.into_iter().map(|p| (p.year, p.value)).collect();
    assert_eq!(points, vec![(2019, 5.0), (2020, 5.0), (2021, 8.0)]);
}

#[test]
fn test_empty_input_for_every_aggregator() {
    assert!(YearTypeAggregator.aggregate(&[]).unwrap().is_empty());
    assert!(CategoryShareAggregator.aggregate(&[]).unwrap().is_empty());
    assert!(CumulativeYearAggregator.aggregate(&[]).unwrap().is_empty());
}

#[test]
fn test_parse_errors_propagate_from_every_aggregator() {
    let bad_amount = NumericValue::from("12,50");

    let err = YearTypeAggregator
        .aggregate(&[YearTypeRecord {
            year: NumericValue::from(2020i64),
            kind: "A".to_string(),
            amount: bad_amount.clone(),
        }])
        .unwrap_err();
    assert!(matches!(err, EtlError::ParseError { .. }));

    let err = CategoryShareAggregator
        .aggregate(&[CategoryRecord {
            category: "food".to_string(),
            amount: bad_amount.clone(),
        }])
        .unwrap_err();
    assert!(matches!(err, EtlError::ParseError { .. }));

    let err = CumulativeYearAggregator
        .aggregate(&[YearAmountRecord {
            year: NumericValue::from(2020i64),
            amount: bad_amount,
        }])
        .unwrap_err();
    assert!(matches!(err, EtlError::ParseError { .. }));
}
