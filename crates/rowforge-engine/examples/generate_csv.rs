use rowforge_core::{FieldDescriptor, FieldKind, SourceSet, TableSource, validate_source};
use rowforge_engine::output::{CsvFormatter, DataWriter};
use rowforge_engine::{DefaultRuleOptions, RuleSet};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut id = FieldDescriptor::new("id", FieldKind::Integer);
    id.is_nullable = false;
    id.is_primary_key = true;
    id.is_auto_increment = true;
    let mut name = FieldDescriptor::new("name", FieldKind::Text);
    name.length = Some(50);
    let source = SourceSet::new(vec![TableSource::new("m_area", vec![id, name])]);
    validate_source(&source)?;

    let rule_set = RuleSet::with_default_rules(DefaultRuleOptions::default());
    let metadata = rule_set.apply_all(&source.tables)?;

    let out_dir = std::env::temp_dir().join("rowforge-example");
    let writer = DataWriter::new(&out_dir, 10, Box::new(CsvFormatter::default()));
    writer.write_all(&metadata, None)?;

    println!("wrote {} tables to {}", metadata.len(), out_dir.display());
    Ok(())
}
