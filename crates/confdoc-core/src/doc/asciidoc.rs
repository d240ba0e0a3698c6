//! AsciiDoc generator for configuration reference tables

use std::collections::HashSet;
use std::fmt::{self, Write};

use super::link::simple_type_name;
use super::naming::{anchor, to_env_var_name};
use super::types::{collect_keys, ConfigDocItem, ConfigDocKey, ConfigDocSection};

const LEGEND: &str = "icon:lock[title=Fixed at build time] Configuration property fixed at build time - All other configuration properties are overridable at runtime";

const MEMORY_SIZE_NOTE: &str = "A size configuration option recognizes strings in this format (shown as a regular expression): `[0-9]+[KkMmGgTtPpEeZzYy]?`.

If no suffix is given, assume bytes.";

const DURATION_NOTE: &str = "To write duration values, use the standard `java.time.Duration` format.
See the link:https://docs.oracle.com/javase/8/docs/api/java/time/Duration.html#parse-java.lang.CharSequence-[Duration#parse() javadoc] for more information.

You can also use a simplified format, starting with a number:

* If the value is only a number, it represents time in seconds.
* If the value is a number followed by `ms`, it represents time in milliseconds.

In other cases, the simplified format is translated to the `java.time.Duration` format for parsing:

* If the value is a number followed by `h`, `m`, or `s`, it is prefixed with `PT`.
* If the value is a number followed by `d`, it is prefixed with `P`.";

/// Rendering options
#[derive(Debug, Clone)]
pub struct AsciidocOptions {
    /// Emit the build-time lock legend above the table
    pub legend: bool,
}

impl Default for AsciidocOptions {
    fn default() -> Self {
        Self { legend: true }
    }
}

/// Generates an AsciiDoc configuration reference from documentation items
pub struct AsciidocGenerator<'a> {
    /// File name without extension, used to namespace anchors
    file_stem: &'a str,
    options: &'a AsciidocOptions,
}

/// Section anchors handed out while rendering one file
#[derive(Default)]
struct SectionAnchors {
    /// Segments of the enclosing sections, outermost first
    path: Vec<String>,
    used: HashSet<String>,
}

impl SectionAnchors {
    /// Reserve `id`, suffixing `-2`, `-3`, ... if it is taken
    fn claim(&mut self, id: &str) -> String {
        let mut candidate = id.to_string();
        let mut n = 2;
        while !self.used.insert(candidate.clone()) {
            candidate = format!("{}-{}", id, n);
            n += 1;
        }
        candidate
    }
}

impl<'a> AsciidocGenerator<'a> {
    /// Create a generator for the file whose name without extension is `file_stem`
    pub fn new(file_stem: &'a str, options: &'a AsciidocOptions) -> Self {
        Self { file_stem, options }
    }

    /// Generate the reference table for a list of items
    pub fn generate(&self, items: &[ConfigDocItem]) -> Result<String, fmt::Error> {
        let mut output = String::new();

        if self.options.legend {
            writeln!(output, "[.configuration-legend]")?;
            writeln!(output, "{}", LEGEND)?;
        }

        writeln!(output, "[.configuration-reference, cols=\"80,.^10,.^10\"]")?;
        writeln!(output, "|===")?;
        writeln!(output)?;

        let table_anchor = format!("{}_configuration", self.file_stem);
        writeln!(
            output,
            "h|[[{0}]]link:#{0}[Configuration property]",
            table_anchor
        )?;
        writeln!(output)?;
        writeln!(output, "h|Type")?;
        writeln!(output, "h|Default")?;
        writeln!(output)?;

        self.write_items(&mut output, items, &mut SectionAnchors::default())?;

        writeln!(output, "|===")?;

        let keys = collect_keys(items);
        if keys.iter().any(|k| k.has_duration_note()) {
            self.write_note(&mut output, "duration", "About the Duration format", DURATION_NOTE)?;
        }
        if keys.iter().any(|k| k.has_memory_size_note()) {
            self.write_note(&mut output, "memory-size", "About the MemorySize format", MEMORY_SIZE_NOTE)?;
        }

        Ok(output)
    }

    fn write_items(
        &self,
        output: &mut String,
        items: &[ConfigDocItem],
        anchors: &mut SectionAnchors,
    ) -> fmt::Result {
        for (index, item) in items.iter().enumerate() {
            match item {
                ConfigDocItem::Key(key) => self.write_key(output, key)?,
                ConfigDocItem::Section(section) => {
                    self.write_section(output, section, index, anchors)?;
                }
            }
        }
        Ok(())
    }

    /// Section anchors come from the section name when it has one, otherwise
    /// from the titles of the enclosing sections. Untitled sections use their
    /// position instead.
    fn write_section(
        &self,
        output: &mut String,
        section: &ConfigDocSection,
        index: usize,
        anchors: &mut SectionAnchors,
    ) -> fmt::Result {
        if section.title.is_empty() {
            anchors.path.push(format!("untitled-{}", index + 1));
        } else {
            anchors.path.push(section.title.clone());
        }
        let base = if section.name.is_empty() {
            anchors.path.join(".")
        } else {
            section.name.clone()
        };
        let id = anchors.claim(&anchor(self.file_stem, &format!("{}-section", base)));

        writeln!(output, "h|[[{0}]]link:#{0}[{1}]", id, section.title)?;
        if let Some(details) = &section.details {
            writeln!(output)?;
            writeln!(output, "{}", details)?;
        }
        writeln!(output)?;
        writeln!(output, "h|Type")?;
        writeln!(output, "h|Default")?;
        writeln!(output)?;

        self.write_items(output, &section.items, anchors)?;
        anchors.path.pop();
        Ok(())
    }

    fn write_key(&self, output: &mut String, key: &ConfigDocKey) -> fmt::Result {
        let id = anchor(self.file_stem, &key.key);
        let illustration = key.phase.illustration();

        if illustration.is_empty() {
            writeln!(output, "a| [[{0}]]`link:#{0}[{1}]`", id, key.key)?;
        } else {
            writeln!(output, "a|{} [[{1}]]`link:#{1}[{2}]`", illustration, id, key.key)?;
        }
        writeln!(output)?;

        writeln!(output, "[.description]")?;
        writeln!(output, "--")?;
        if !key.description.is_empty() {
            writeln!(output, "{}", key.description)?;
            writeln!(output)?;
        }
        writeln!(output, "Environment variable: `+++{}+++`", to_env_var_name(&key.key))?;
        writeln!(output, "--|{}", self.type_cell(key))?;
        writeln!(output, "|{}", default_cell(key))?;
        writeln!(output)?;
        writeln!(output)?;

        Ok(())
    }

    fn type_cell(&self, key: &ConfigDocKey) -> String {
        if !key.accepted_values.is_empty() {
            let values: Vec<_> = key
                .accepted_values
                .iter()
                .map(|v| format!("`{}`", v))
                .collect();
            return values.join(", ");
        }

        let simple = simple_type_name(&key.type_name);
        let mut cell = if key.has_duration_note() {
            format!(
                "link:#duration-note-anchor-{}[{}]",
                self.file_stem, simple
            )
        } else if key.has_memory_size_note() {
            format!(
                "link:#memory-size-note-anchor-{}[{}]",
                self.file_stem, simple
            )
        } else {
            match &key.doc_link {
                Some(link) => format!("link:{}[{}]", link, simple),
                None => simple,
            }
        };

        if key.list {
            cell = format!("list of {}", cell);
        }
        cell
    }

    fn write_note(&self, output: &mut String, kind: &str, title: &str, body: &str) -> fmt::Result {
        writeln!(output)?;
        writeln!(output, "[NOTE]")?;
        writeln!(output, "[id='{}-note-anchor-{}']", kind, self.file_stem)?;
        writeln!(output, ".{}", title)?;
        writeln!(output, "====")?;
        writeln!(output, "{}", body)?;
        writeln!(output, "====")
    }
}

fn default_cell(key: &ConfigDocKey) -> String {
    match &key.default_value {
        Some(value) if !value.is_empty() => format!("`{}`", value),
        _ if key.optional => String::new(),
        _ => "required icon:exclamation-circle[title=Configuration property is required]".to_string(),
    }
}
