use crate::{
    mcp::protocol::ContentBlock,
    tools::{
        args::{AnalysisFocus, CodeAnalysisArgs},
        ToolError,
    },
};

use super::ToolContext;

const SECURITY: &[&str] = &[
    "Check for reentrancy vulnerabilities",
    "Validate input parameters",
    "Implement access controls",
    "Use OpenZeppelin libraries",
    "Add emergency pause mechanisms",
];

const GAS_EFFICIENCY: &[&str] = &[
    "Use 'calldata' instead of 'memory' for external functions",
    "Pack structs efficiently",
    "Use 'unchecked' blocks where safe",
    "Minimize storage operations",
    "Cache storage variables in memory",
];

const OPTIMIZATION: &[&str] = &[
    "Use events for off-chain data",
    "Implement batch operations",
    "Consider proxy patterns for upgrades",
    "Optimize loop operations",
    "Use libraries for common functions",
];

const BEST_PRACTICES: &[&str] = &[
    "Follow naming conventions",
    "Add comprehensive documentation",
    "Implement proper error handling",
    "Use modifiers for common checks",
    "Write comprehensive tests",
];

fn checklist(focus: AnalysisFocus) -> (&'static str, &'static [&'static str]) {
    match focus {
        AnalysisFocus::Security => ("🔒 SECURITY ANALYSIS:", SECURITY),
        AnalysisFocus::GasEfficiency => ("⛽ GAS OPTIMIZATION:", GAS_EFFICIENCY),
        AnalysisFocus::Optimization => ("⚡ OPTIMIZATION SUGGESTIONS:", OPTIMIZATION),
        AnalysisFocus::BestPractices => ("✅ BEST PRACTICES:", BEST_PRACTICES),
    }
}

/// Static advice for the requested focus. The submitted code is not inspected.
pub fn analyze_code(
    _ctx: &ToolContext,
    args: &CodeAnalysisArgs,
) -> Result<Vec<ContentBlock>, ToolError> {
    let (heading, items) = checklist(args.analysis_focus);
    let items = items
        .iter()
        .map(|item| format!("• {}", item))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(vec![ContentBlock::text(format!(
        "🧠 OB-1 + COPILOT CODE ANALYSIS\n\n\
         📝 Language: {}\n\
         🎯 Focus: {}\n\n\
         {}\n{}\n\n\
         🎯 Enhanced by OB-1 blockchain intelligence",
        args.language.as_str().to_uppercase(),
        args.analysis_focus.as_str().replace('_', " ").to_uppercase(),
        heading,
        items
    ))])
}
