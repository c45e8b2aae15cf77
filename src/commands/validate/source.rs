use super::*;

pub const NAME_KEYS: [&str; 3] = ["agent_name", "Agent_Name", "name"];
pub const CATEGORY_KEYS: [&str; 2] = ["category", "Category"];

struct RequiredField {
    label: &'static str,
    aliases: &'static [&'static str],
}

const REQUIRED_FIELDS: [RequiredField; 3] = [
    RequiredField {
        label: "name (or agent_name)",
        aliases: &["name", "agent_name"],
    },
    RequiredField {
        label: "category",
        aliases: &["category"],
    },
    RequiredField {
        label: "description",
        aliases: &["description"],
    },
];

#[derive(Debug)]
pub struct Record {
    pub line: u64,
    pub values: Vec<String>,
    pub fields: HashMap<String, String>,
}

impl Record {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn first_non_empty(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|key| self.get(key))
            .map(str::trim)
            .find(|value| !value.is_empty())
    }
}

#[derive(Debug, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

impl Table {
    pub fn has_header(&self) -> bool {
        self.headers.iter().any(|header| !header.trim().is_empty())
    }
}

pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn parse_table(content: &str) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .context("failed to read csv header row")?
        .iter()
        .map(ToOwned::to_owned)
        .collect::<Vec<String>>();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.context("failed to read csv record")?;
        let line = row.position().map(|position| position.line()).unwrap_or(0);
        let values = row.iter().map(ToOwned::to_owned).collect::<Vec<String>>();
        let fields = headers
            .iter()
            .cloned()
            .zip(values.iter().cloned())
            .collect::<HashMap<String, String>>();

        records.push(Record {
            line,
            values,
            fields,
        });
    }

    Ok(Table { headers, records })
}

pub fn load_table(path: &Path) -> Result<Table> {
    let content = read_source(path)?;
    parse_table(&content)
}

pub fn missing_source_message(path: &Path) -> String {
    format!("File does not exist: {}", path.display())
}

pub fn read_failure_message(err: &anyhow::Error) -> String {
    format!("Failed to read file: {err:#}")
}

fn resolve_required_columns(headers: &[String], field: &RequiredField) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .filter(|(_, header)| {
            let normalized = header.trim().to_lowercase();
            field.aliases.iter().any(|alias| normalized == *alias)
        })
        .map(|(index, _)| index)
        .collect()
}

impl CoverageValidator {
    pub fn check_source_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    pub fn check_structure(&self, path: &Path) -> StructureCheck {
        if !self.check_source_exists(path) {
            return StructureCheck::failed(missing_source_message(path));
        }

        let content = match read_source(path) {
            Ok(content) => content,
            Err(err) => return StructureCheck::failed(read_failure_message(&err)),
        };
        if content.trim().is_empty() {
            return StructureCheck::failed("File is empty");
        }

        let table = match parse_table(&content) {
            Ok(table) => table,
            Err(err) => return StructureCheck::failed(read_failure_message(&err)),
        };
        if !table.has_header() {
            return StructureCheck::failed("No header row found");
        }

        let mut errors = Vec::new();
        let mut required_groups = Vec::new();
        for field in &REQUIRED_FIELDS {
            let columns = resolve_required_columns(&table.headers, field);
            if columns.is_empty() {
                errors.push(format!("Missing required field: {}", field.label));
            } else {
                let label = columns
                    .iter()
                    .map(|&index| table.headers[index].as_str())
                    .collect::<Vec<&str>>()
                    .join("' or '");
                required_groups.push((label, columns));
            }
        }

        for record in &table.records {
            if record.values.len() != table.headers.len() {
                errors.push(format!(
                    "Row {}: expected {} fields, found {}",
                    record.line,
                    table.headers.len(),
                    record.values.len()
                ));
            }

            for (label, columns) in &required_groups {
                let empty = columns.iter().all(|&index| {
                    record
                        .values
                        .get(index)
                        .is_none_or(|value| value.trim().is_empty())
                });
                if empty {
                    errors.push(format!(
                        "Row {}: empty value in required field '{label}'",
                        record.line
                    ));
                }
            }
        }

        if !errors.is_empty() {
            warn!(
                path = %path.display(),
                error_count = errors.len(),
                "structure check found problems"
            );
        }

        StructureCheck {
            ok: errors.is_empty(),
            errors,
            headers: table.headers,
            row_count: table.records.len(),
        }
    }
}
