use serde::{Deserialize, Serialize};

/// Template family an analysis is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Frontend,
    Backend,
    Algorithm,
}

impl TemplateKind {
    /// Used for any subcategory without a template of its own
    pub const FALLBACK: TemplateKind = TemplateKind::Frontend;

    /// Subcategory names that select each template out of the box
    pub fn default_keys(self) -> &'static [&'static str] {
        match self {
            TemplateKind::Frontend => &["前端", "frontend", "front-end", "web"],
            TemplateKind::Backend => &["后端", "backend", "back-end", "server"],
            TemplateKind::Algorithm => &["算法", "algorithm", "algorithms"],
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            TemplateKind::Frontend => FRONTEND,
            TemplateKind::Backend => BACKEND,
            TemplateKind::Algorithm => ALGORITHM,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateKind::Frontend => "frontend",
            TemplateKind::Backend => "backend",
            TemplateKind::Algorithm => "algorithm",
        }
    }
}

const FRONTEND: &str = "\
A classic front-end question that checks how well the candidate understands the core concepts.

**Key points:**
• Solid grasp of how the JavaScript runtime works
• Working knowledge of a modern front-end framework
• Familiarity with what the browser does underneath

**How to answer:**
1. Explain the concept and the mechanism behind it
2. Walk through a concrete example of where it applies
3. Compare the alternatives and their trade-offs
4. Tie it back to a project you have shipped

**Bonus points:**
• Discuss it from a rendering performance angle
• Mention the established best practices
• Show awareness of where the platform is heading";

const BACKEND: &str = "\
A back-end architecture question; the interviewer wants to see structured system thinking.

**Key points:**
• Schema design and query performance
• Understanding of distributed system architecture
• Handling high-concurrency workloads

**Answer outline:**
1. Pin down the business requirements and the technical constraints
2. Sketch the architecture and the data model
3. Cover performance, security and scalability
4. Weigh the candidate designs against each other

**Going deeper:**
• Caching strategy and data consistency
• Splitting and governing services
• Monitoring and incident handling";

const ALGORITHM: &str = "\
A classic algorithm question that tests problem-solving and optimization.

**Complexity:**
• Time: O(n log n)
• Space: O(1)
• Fits large-scale data processing

**Steps:**
1. Restate the problem and its constraints
2. Work out the cost of the brute-force solution
3. Optimize to bring the complexity down
4. Write the code and test the edge cases

**Optimization ideas:**
• Pick the right data structure
• Choose between recursion and iteration deliberately
• Keep an eye on memory use";
