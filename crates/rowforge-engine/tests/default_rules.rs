use std::collections::HashSet;

use chrono::Duration;
use rowforge_core::{FieldDescriptor, FieldKind, TableSource};
use rowforge_engine::rules::library::{ChoiceRule, DateSequenceRule, DateTimeSequenceRule};
use rowforge_engine::{DefaultRuleOptions, Metadata, Row, RuleSet, Value};

fn options() -> DefaultRuleOptions {
    DefaultRuleOptions {
        seed: 42,
        ..Default::default()
    }
}

fn field(name: &str, kind: FieldKind) -> FieldDescriptor {
    FieldDescriptor::new(name, kind)
}

fn m_area() -> TableSource {
    let mut id = field("id", FieldKind::Integer);
    id.is_nullable = false;
    id.is_primary_key = true;
    id.is_auto_increment = true;
    let mut name = field("name", FieldKind::Text);
    name.length = Some(50);
    TableSource::new("m_area", vec![id, name])
}

fn resolve(source: TableSource) -> Metadata {
    RuleSet::with_default_rules(options())
        .apply_all(&[source])
        .expect("resolution succeeds")
}

fn column_values(source: TableSource, column: &str, rows: u64) -> Vec<Value> {
    let metadata = resolve(source);
    let table = metadata.tables().first().expect("one table");
    let column = table.column(column).expect("column resolved");
    (0..rows)
        .map(|index| column.value(index).expect("value generated"))
        .collect()
}

#[test]
fn default_library_priority_layout() {
    let rule_set = RuleSet::with_default_rules(options());

    let layout: Vec<(i64, &str)> = rule_set
        .rules()
        .map(|(priority, rule)| (priority, rule.name()))
        .collect();

    assert_eq!(layout.first(), Some(&(9999, "auto_increment")));
    assert_eq!(layout.last(), Some(&(-123, "null")));
    for pair in layout.windows(2) {
        assert!(pair[0].0 > pair[1].0, "priorities must be unique descending");
    }
}

#[test]
fn basic_integer_text_table() {
    let metadata = resolve(m_area());
    let table = metadata.table("m_area").expect("table resolved");

    let rows: Vec<Row> = table.generate(3).collect::<Result<_, _>>().unwrap();
    assert_eq!(rows.len(), 3);

    let ids: Vec<i64> = rows
        .iter()
        .map(|row| row.get("id").unwrap().as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let names: Vec<String> = rows
        .iter()
        .map(|row| row.get("name").unwrap().as_str().unwrap().to_string())
        .collect();
    assert!(names.iter().all(|name| !name.is_empty()));
    let distinct: HashSet<&String> = names.iter().collect();
    assert_eq!(distinct.len(), names.len());
}

#[test]
fn unique_string_field_yields_distinct_values() {
    let mut code = field("code", FieldKind::Text);
    code.length = Some(50);
    code.is_unique = true;
    let source = TableSource::new("m_code", vec![code]);

    let values = column_values(source, "code", 100);
    let rendered: HashSet<String> = values
        .iter()
        .map(|value| value.as_str().unwrap().to_string())
        .collect();

    assert_eq!(rendered.len(), 100);
    assert!(rendered.iter().all(|value| value.starts_with("code_")));
}

#[test]
fn unique_integer_field_yields_sequential_values() {
    let mut serial = field("serial", FieldKind::Integer);
    serial.is_unique = true;
    let source = TableSource::new("m_serial", vec![serial]);

    let values: Vec<i64> = column_values(source, "serial", 5)
        .iter()
        .map(|value| value.as_i64().unwrap())
        .collect();
    assert_eq!(values, vec![1, 2, 3, 4, 5]);
}

#[test]
fn generate_is_deterministic() {
    let metadata = resolve(m_area());
    let table = metadata.table("m_area").expect("table resolved");

    let first: Vec<Row> = table.generate(5).collect::<Result<_, _>>().unwrap();
    let second: Vec<Row> = table.generate(5).collect::<Result<_, _>>().unwrap();

    assert_eq!(first, second);
}

#[test]
fn resolution_is_repeatable_across_rule_sets() {
    let first = resolve(m_area());
    let second = resolve(m_area());

    let row_a = first.table("m_area").unwrap().row(4).unwrap();
    let row_b = second.table("m_area").unwrap().row(4).unwrap();
    assert_eq!(row_a, row_b);
}

#[test]
fn short_text_fields_use_random_strings() {
    let mut tag = field("tag", FieldKind::Text);
    tag.length = Some(3);
    let source = TableSource::new("m_tag", vec![tag]);

    for value in column_values(source, "tag", 30) {
        let text = value.as_str().expect("text value");
        assert!(text.len() <= 3);
        assert!(text.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}

#[test]
fn integer_fields_stay_in_default_bounds() {
    let source = TableSource::new("m_num", vec![field("amount", FieldKind::Integer)]);

    for value in column_values(source, "amount", 50) {
        let value = value.as_i64().expect("integer value");
        assert!((0..=100).contains(&value));
    }
}

#[test]
fn float_fields_stay_in_default_bounds() {
    let source = TableSource::new("m_num", vec![field("ratio", FieldKind::Float)]);

    for value in column_values(source, "ratio", 50) {
        let value = value.as_f64().expect("float value");
        assert!((0.0..=100.0).contains(&value));
    }
}

#[test]
fn boolean_fields_resolve_to_bools() {
    let source = TableSource::new("m_flag", vec![field("active", FieldKind::Boolean)]);

    for value in column_values(source, "active", 20) {
        assert!(value.as_bool().is_some());
    }
}

#[test]
fn date_fields_stay_in_window() {
    let opts = options();
    let source = TableSource::new("m_day", vec![field("day", FieldKind::Date)]);

    for value in column_values(source, "day", 50) {
        let value = value.as_date().expect("date value");
        assert!(value >= opts.base_date);
        assert!(value <= opts.base_date + Duration::days(10));
    }
}

#[test]
fn datetime_fields_stay_in_window() {
    let opts = options();
    let source = TableSource::new("m_time", vec![field("created", FieldKind::DateTime)]);

    for value in column_values(source, "created", 50) {
        let value = value.as_datetime().expect("datetime value");
        assert!(value >= opts.base_datetime);
        assert!(value <= opts.base_datetime + Duration::days(1));
    }
}

#[test]
fn mail_suffix_resolves_to_email() {
    let source = TableSource::new("m_user", vec![field("email", FieldKind::Text)]);

    for value in column_values(source, "email", 10) {
        assert!(value.as_str().expect("text value").contains('@'));
    }
}

#[test]
fn name_suffix_resolves_to_first_name() {
    let source = TableSource::new("m_user", vec![field("username", FieldKind::Text)]);

    for value in column_values(source, "username", 10) {
        assert!(!value.as_str().expect("text value").is_empty());
    }
}

#[test]
fn unknown_kinds_fall_back_to_null() {
    let source = TableSource::new("m_blob", vec![field("payload", FieldKind::Other)]);

    for value in column_values(source, "payload", 5) {
        assert!(value.is_null());
    }
}

#[test]
fn sequence_rule_overrides_random_window() {
    let opts = options();
    let mut rule_set = RuleSet::with_default_rules(opts.clone());
    rule_set.add_rule(
        Box::new(DateTimeSequenceRule::new(opts.base_datetime)),
        Some(20_000),
    );

    let source = TableSource::new("m_term", vec![field("starttime", FieldKind::DateTime)]);
    let metadata = rule_set.apply_all(&[source]).expect("resolution succeeds");
    let column = metadata
        .table("m_term")
        .unwrap()
        .column("starttime")
        .unwrap();

    let first = column.value(0).unwrap().as_datetime().unwrap();
    let second = column.value(1).unwrap().as_datetime().unwrap();

    assert_eq!(first, opts.base_datetime);
    assert_eq!(second - first, Duration::seconds(121));
}

#[test]
fn date_sequence_rule_steps_daily() {
    let opts = options();
    let mut rule_set = RuleSet::with_default_rules(opts.clone());
    rule_set.add_rule(Box::new(DateSequenceRule::new(opts.base_date)), Some(20_000));

    let source = TableSource::new("m_term", vec![field("startdate", FieldKind::Date)]);
    let metadata = rule_set.apply_all(&[source]).expect("resolution succeeds");
    let column = metadata
        .table("m_term")
        .unwrap()
        .column("startdate")
        .unwrap();

    assert_eq!(
        column.value(0).unwrap().as_date().unwrap(),
        opts.base_date
    );
    assert_eq!(
        column.value(3).unwrap().as_date().unwrap(),
        opts.base_date + Duration::days(3)
    );
}

#[test]
fn choice_rule_picks_from_fixed_options() {
    let mut rule_set = RuleSet::with_default_rules(options());
    let choices = vec![Value::Int(1), Value::Int(0)];
    rule_set.add_rule(Box::new(ChoiceRule::new(choices.clone(), 42)), Some(20_000));

    let source = TableSource::new("m_flag", vec![field("state", FieldKind::Other)]);
    let metadata = rule_set.apply_all(&[source]).expect("resolution succeeds");
    let column = metadata.table("m_flag").unwrap().column("state").unwrap();

    for index in 0..20 {
        assert!(choices.contains(&column.value(index).unwrap()));
    }
}
