//! Document classification and script region extraction.

use std::path::Path;

use crate::parse_component;

/// Whether a path is linted directly or through script extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Ordinary TypeScript source, analyzable as-is.
    Plain,
    /// Single-file component: only the embedded script region is analyzable.
    Hybrid,
}

impl DocumentKind {
    /// Classifies a path by suffix. Hybrid documents are `.vue` files,
    /// optionally carrying an extra `.ts` suffix.
    pub fn of(path: &Path) -> Self {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if name.ends_with(".vue") || name.ends_with(".vue.ts") {
            Self::Hybrid
        } else {
            Self::Plain
        }
    }

    /// Returns true for hybrid documents.
    pub fn is_hybrid(self) -> bool {
        matches!(self, Self::Hybrid)
    }
}

/// The analyzable script region of a hybrid document plus the exact
/// surrounding text needed to reconstruct the original framing.
///
/// `prefix + script + suffix` is the document content as it existed at
/// extraction time. Reassembly after a fix pass goes through
/// [`ExtractedRegion::reassemble`], which normalizes exactly one newline on
/// each side of the region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedRegion {
    /// Document content up to the start of the script region.
    pub prefix: String,
    /// The raw script region.
    pub script: String,
    /// Document content from the end of the script region.
    pub suffix: String,
}

impl ExtractedRegion {
    /// Returns the script padded with one newline per prefix line, so that
    /// diagnostics computed against the padded source carry the line
    /// numbers of the original document.
    pub fn padded_script(&self) -> String {
        let pad = self.prefix.matches('\n').count();
        let mut out = String::with_capacity(pad + self.script.len());
        out.extend(std::iter::repeat_n('\n', pad));
        out.push_str(&self.script);
        out
    }

    /// Splices a (possibly fixed, possibly padded) script back between the
    /// retained prefix and suffix.
    pub fn reassemble(&self, script: &str) -> String {
        format!("{}\n{}\n{}", self.prefix, script.trim(), self.suffix)
    }
}

/// Extracts the embedded TypeScript region of a hybrid document.
///
/// Returns `None` when the document has no `<script>` block or the block's
/// declared language is not in the TypeScript family; such documents are
/// linted as empty. This mirrors how the component compiler exposes script
/// blocks: `lang` must be exactly `ts` or `tsx`.
pub fn extract(content: &str) -> Option<ExtractedRegion> {
    let doc = parse_component(content);
    let script = doc.block("script")?;
    let lang = script.lang.as_deref()?;
    if !matches!(lang, "ts" | "tsx") {
        return None;
    }

    let start = script.content_span.start as usize;
    let end = script.content_span.end as usize;
    Some(ExtractedRegion {
        prefix: content[..start].to_string(),
        script: content[start..end].to_string(),
        suffix: content[end..].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const COMPONENT: &str = "<template>\n  <p>hi</p>\n</template>\n<script lang=\"ts\">\nlet x: any = 1;\n</script>\n<style></style>\n";

    #[rstest]
    #[case("app.vue", DocumentKind::Hybrid)]
    #[case("app.vue.ts", DocumentKind::Hybrid)]
    #[case("dir/app.vue", DocumentKind::Hybrid)]
    #[case("app.ts", DocumentKind::Plain)]
    #[case("app.tsx", DocumentKind::Plain)]
    #[case("vue.ts", DocumentKind::Plain)]
    #[case("app.vue.bak", DocumentKind::Plain)]
    fn test_classify(#[case] path: &str, #[case] expected: DocumentKind) {
        assert_eq!(DocumentKind::of(Path::new(path)), expected);
    }

    #[test]
    fn test_extract_recognized() {
        let region = extract(COMPONENT).unwrap();
        assert_eq!(region.script, "\nlet x: any = 1;\n");
        assert!(region.prefix.ends_with("<script lang=\"ts\">"));
        assert!(region.suffix.starts_with("</script>"));
    }

    #[test]
    fn test_extract_reconstructs() {
        let region = extract(COMPONENT).unwrap();
        let rebuilt = format!("{}{}{}", region.prefix, region.script, region.suffix);
        assert_eq!(rebuilt, COMPONENT);
    }

    #[test]
    fn test_extract_rejects_missing_script() {
        assert_eq!(extract("<template><p/></template>"), None);
    }

    #[test]
    fn test_extract_rejects_untyped_script() {
        assert_eq!(extract("<script>let x = 1</script>"), None);
        assert_eq!(extract("<script lang=\"js\">let x = 1</script>"), None);
    }

    #[test]
    fn test_extract_accepts_tsx() {
        let region = extract("<script lang=\"tsx\">let x = 1</script>").unwrap();
        assert_eq!(region.script, "let x = 1");
    }

    #[test]
    fn test_padded_script_preserves_line_numbers() {
        let region = extract(COMPONENT).unwrap();
        let padded = region.padded_script();
        // The script content begins right after the open tag on line 4, so
        // `let` must land on line 5 of the padded source, same as in the
        // original document.
        let line_of_let = padded[..padded.find("let").unwrap()]
            .matches('\n')
            .count()
            + 1;
        let original_line = COMPONENT[..COMPONENT.find("let").unwrap()]
            .matches('\n')
            .count()
            + 1;
        assert_eq!(line_of_let, original_line);
    }

    #[test]
    fn test_reassemble_round_trip_normalizes_one_newline() {
        let region = extract(COMPONENT).unwrap();
        let rebuilt = region.reassemble(&region.padded_script());
        assert_eq!(rebuilt, COMPONENT);
    }

    #[test]
    fn test_reassemble_with_fixed_script() {
        let region = extract(COMPONENT).unwrap();
        let rebuilt = region.reassemble("\n\n\nconst x: number = 1;\n");
        assert_eq!(
            rebuilt,
            "<template>\n  <p>hi</p>\n</template>\n<script lang=\"ts\">\nconst x: number = 1;\n</script>\n<style></style>\n"
        );
    }

    #[test]
    fn test_script_on_same_line_as_tag() {
        let source = "<template>t</template>\n<script lang=\"ts\">let x:any=1</script>\n<style></style>";
        let region = extract(source).unwrap();
        let padded = region.padded_script();
        assert_eq!(padded, "\nlet x:any=1");
    }
}
