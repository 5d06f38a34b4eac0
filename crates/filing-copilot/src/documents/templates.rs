use crate::classification::ClassTable;
use crate::intake::TrademarkIntake;

use super::render::TextDocument;

const FOOTER: &str = "Prepared with an assistive filing tool. This document is not legal advice; \
                      review all details before submission to CIPC.";

/// Mark text reduced to a file-name friendly token.
pub fn file_slug(mark_text: &str) -> String {
    let mut slug = String::new();
    for ch in mark_text.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
        } else if !slug.ends_with('_') && !slug.is_empty() {
            slug.push('_');
        }
    }
    let slug = slug.trim_end_matches('_').to_string();
    if slug.is_empty() {
        "mark".to_string()
    } else {
        slug
    }
}

fn class_lines(intake: &TrademarkIntake, table: &ClassTable) -> Vec<String> {
    if intake.nice_classes.is_empty() {
        return vec!["No classes selected".to_string()];
    }

    intake
        .nice_classes
        .iter()
        .map(|class| match table.title(class.number()) {
            Some(title) => format!("Class {}: {}", class.number(), title),
            None => format!("Class {}", class.number()),
        })
        .collect()
}

fn class_list(intake: &TrademarkIntake) -> String {
    intake
        .nice_classes
        .iter()
        .map(|class| class.number().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Draft of CIPC form TM1 with the intake fields in place.
pub fn application_form(intake: &TrademarkIntake, table: &ClassTable) -> TextDocument {
    let applicant = &intake.applicant;
    let mut document = TextDocument::new(format!(
        "TM1_Application_{}.pdf",
        file_slug(&intake.mark_text)
    ));

    document
        .title("Form TM1: Application for Registration of a Trade Mark")
        .body("Companies and Intellectual Property Commission (CIPC), South Africa")
        .heading("1. Trade mark")
        .field("Mark", &intake.mark_text)
        .field("Slogan", intake.slogan.as_deref().unwrap_or(""))
        .heading("2. Classes of goods or services");
    for line in class_lines(intake, table) {
        document.body(line);
    }

    document
        .heading("3. Applicant")
        .field("Full name", &applicant.full_name)
        .field("Email", applicant.email.as_str())
        .field("Phone", &applicant.phone_number)
        .heading("4. Address for service");
    for line in applicant.address_lines() {
        document.body(line);
    }

    document
        .heading("5. Declaration")
        .body(
            "The applicant claims to be the proprietor of the trade mark and uses or intends \
             to use it in relation to the goods or services listed above.",
        )
        .blank()
        .body("Signature: ______________________________    Date: ______________")
        .blank()
        .body(FOOTER);
    document
}

/// Appointment of an agent to file on the applicant's behalf.
pub fn power_of_attorney(intake: &TrademarkIntake) -> TextDocument {
    let applicant = &intake.applicant;
    let address = applicant.address_lines().join(", ");
    let mut document = TextDocument::new(format!(
        "Power_of_Attorney_{}.pdf",
        file_slug(&intake.mark_text)
    ));

    document
        .title("Power of Attorney")
        .heading("Appointment")
        .body(format!(
            "I/We, {}, of {}, hereby appoint ________________________________ to act as my/our \
             agent for the application to register the trade mark \"{}\" in class(es) {} with \
             the Companies and Intellectual Property Commission, and to take all steps \
             necessary in connection with that application.",
            applicant.full_name,
            address,
            intake.mark_text,
            class_list(intake),
        ))
        .heading("Applicant contact")
        .field("Email", applicant.email.as_str())
        .field("Phone", &applicant.phone_number)
        .heading("Signed")
        .body("Signature: ______________________________")
        .body(format!("Name: {}", applicant.full_name))
        .body("Place: ______________________    Date: ______________")
        .blank()
        .body(FOOTER);
    document
}

/// Step-by-step checklist for lodging the package.
pub fn filing_guide(intake: &TrademarkIntake, table: &ClassTable) -> TextDocument {
    let mut document = TextDocument::new(format!(
        "Filing_Guide_{}.pdf",
        file_slug(&intake.mark_text)
    ));

    document
        .title(format!("Filing guide for \"{}\"", intake.mark_text))
        .heading("What is in this package")
        .body("- Form TM1 draft with your mark, classes and applicant details")
        .body("- Power of attorney, needed only if an agent files for you")
        .body("- This guide")
        .heading("Classes covered");
    for line in class_lines(intake, table) {
        document.body(format!("- {line}"));
    }

    document
        .heading("Steps")
        .body("1. Check every field of the TM1 draft against your records.")
        .body("2. Register or sign in as a customer on the CIPC e-services portal.")
        .body("3. Make sure your customer account holds enough funds for one filing per class.")
        .body("4. Lodge the application, entering the details exactly as on the TM1 draft.")
        .body("5. Keep the application number and proof of payment for your records.")
        .body("6. Watch for CIPC correspondence; examination can raise objections.")
        .heading("Before you file")
        .body(
            "A basic name check is not a full availability search. Consider a comprehensive \
             search and advice from a qualified trade mark attorney.",
        )
        .blank()
        .body(FOOTER);
    document
}
