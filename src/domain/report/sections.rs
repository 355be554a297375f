/// Formatting directive appended to every section prompt
pub const LIST_DIRECTIVE: &str = " Present each key point as a numbered list starting with 1.), \
with each point on a new line. Use exactly this format: '1.) Point one' \
followed by '\\n2.) Point two', etc. Never use markdown.";

/// One report section: the JSON key it is stored under and the instruction sent to the model.
/// `template` contains a single `{idea}` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSection {
    pub name: &'static str,
    template: &'static str,
}

impl ReportSection {
    /// Full prompt for this section, including the list formatting directive
    pub fn prompt(&self, idea: &str) -> String {
        let mut prompt = self.template.replace("{idea}", idea);
        prompt.push_str(LIST_DIRECTIVE);
        prompt
    }
}

/// The ten report sections, in the order they are generated and serialized
pub const REPORT_SECTIONS: [ReportSection; 10] = [
    ReportSection {
        name: "executive summary",
        template: "Provide a concise executive summary for '{idea}' with 5 key points in numbered format with '\n' after every point",
    },
    ReportSection {
        name: "industry overview",
        template: "Analyze the industry for '{idea}' with 5 numbered key insights with '\n' after every point",
    },
    ReportSection {
        name: "target market analysis",
        template: "Describe target market for '{idea}' with 5 numbered demographic and psychographic points with '\n' after every point",
    },
    ReportSection {
        name: "competitor analysis",
        template: "List 5 key competitor insights for '{idea}' in numbered format with '\n' after every point",
    },
    ReportSection {
        name: "market pricing",
        template: "Outline 5 pricing strategy points for '{idea}' as numbered list with '\n' after every point",
    },
    ReportSection {
        name: "swot analysis",
        template: "Present SWOT analysis for '{idea}' as 4 numbered points (one for each category) with '\n' after every point",
    },
    ReportSection {
        name: "trends",
        template: "List 5 emerging trends relevant to '{idea}' as numbered points with '\n' after every point",
    },
    ReportSection {
        name: "regulatory",
        template: "Describe 3 regulatory considerations for '{idea}' as numbered points with '\n' after every point",
    },
    ReportSection {
        name: "go to market",
        template: "Outline 5 go-to-market strategies for '{idea}' as numbered points with '\n' after every point",
    },
    ReportSection {
        name: "financial projections",
        template: "Provide 5 financial projections for '{idea}' as numbered points with '\n' after every point",
    },
];
