use crate::report::{AssessmentReport, BusinessTypes};
use crate::types::catalog::{Catalog, InsuranceProduct};
use crate::types::question::QuestionSet;

pub fn to_markdown(report: &AssessmentReport<'_>) -> String {
    let result = report.result;
    let mut output = String::new();
    output.push_str("# Your Insurance Recommendations\n\n");

    output.push_str("## Business Profile\n\n");
    let profile = &result.business_profile;
    if let Some(industry) = &profile.industry {
        output.push_str(&format!("- Industry: {industry}\n"));
    }
    if let Some(employees) = &profile.employees {
        output.push_str(&format!("- Size: {employees}\n"));
    }
    for label in profile.traits() {
        output.push_str(&format!("- {label}\n"));
    }
    if profile.industry.is_none() && profile.employees.is_none() && profile.traits().is_empty() {
        output.push_str("- not provided\n");
    }
    output.push('\n');

    let essential = result.essential().collect::<Vec<_>>();
    output.push_str(&format!("## Essential ({})\n\n", essential.len()));
    if essential.is_empty() {
        output.push_str("No essential insurance types identified for your business.\n\n");
    }
    for product in essential {
        push_product(&mut output, product, Some(result.score_of(&product.id)));
    }

    let additional = result.additional().collect::<Vec<_>>();
    output.push_str(&format!("## Recommended ({})\n\n", additional.len()));
    if additional.is_empty() {
        output.push_str("No additional recommended insurance types identified for your business.\n\n");
    }
    for product in additional {
        push_product(&mut output, product, Some(result.score_of(&product.id)));
    }

    output.push_str("## Relevance Scores\n\n");
    for (id, score) in &result.relevance_scores {
        output.push_str(&format!("- {id}: {score:.2}\n"));
    }

    if let Some(code) = &report.share_code {
        output.push_str(&format!("\nShare code: {code}\n"));
    }

    output
}

fn push_product(output: &mut String, product: &InsuranceProduct, score: Option<f64>) {
    match score {
        Some(score) => output.push_str(&format!(
            "### {} [{}] (score {:.2})\n\n",
            product.name,
            product.importance.as_str(),
            score
        )),
        None => output.push_str(&format!(
            "### {} [{}]\n\n",
            product.name,
            product.importance.as_str()
        )),
    }
    if !product.description.is_empty() {
        output.push_str(&format!("{}\n\n", product.description));
    }
    if !product.coverage_details.is_empty() {
        output.push_str("Coverage includes:\n");
        for detail in &product.coverage_details {
            output.push_str(&format!("- {detail}\n"));
        }
        output.push('\n');
    }
    if !product.relevant_for.is_empty() {
        let names = product
            .relevant_for
            .iter()
            .map(|segment| segment.name.as_str())
            .collect::<Vec<_>>();
        output.push_str(&format!("Especially important for: {}\n\n", names.join(", ")));
    }
}

pub fn questions_markdown(questions: &QuestionSet) -> String {
    let mut output = String::from("# Assessment Questions\n\n");
    for (index, question) in questions.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} (`{}`, {})\n",
            index + 1,
            question.prompt,
            question.id,
            question.answer_kind.as_str()
        ));
        if let Some(help) = &question.help_text {
            output.push_str(&format!("   _{help}_\n"));
        }
        for option in &question.options {
            output.push_str(&format!("   - {option}\n"));
        }
    }
    output
}

pub fn catalog_markdown(catalog: &Catalog) -> String {
    let mut output = String::from("# Insurance Catalog\n\n");
    for product in catalog.iter() {
        push_product(&mut output, product, None);
    }
    output
}

pub fn business_types_markdown(types: &BusinessTypes) -> String {
    let mut output = String::from("# Industries\n\n");
    for industry in &types.industries {
        output.push_str(&format!("- {} (`{}`)\n", industry.name, industry.id));
        for kind in &industry.businesses {
            output.push_str(&format!("  - {}: {}\n", kind.name, kind.description));
        }
    }

    output.push_str("\n# Business Sizes\n\n");
    for size in &types.business_sizes {
        match size.revenue_range {
            Some(revenue) => output.push_str(&format!(
                "- {}: {}, revenue {}\n",
                size.name, size.employee_range, revenue
            )),
            None => output.push_str(&format!("- {}: {}\n", size.name, size.employee_range)),
        }
    }
    output
}
