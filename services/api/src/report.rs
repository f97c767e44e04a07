use chrono::NaiveDate;
use clap::Args;
use ecopick::error::AppError;
use ecopick::workflows::guide::{FaqCatalog, FaqPage, DEFAULT_PAGE_SIZE};
use ecopick::workflows::pickup::{
    ItemCategory, IntakeSession, PricingEngine, RegionCatalog, RegionStatus,
};
use std::fmt::Write as _;

#[derive(Args, Debug, Default)]
pub(crate) struct QuoteArgs {
    /// Clothing weight in kg
    #[arg(long, default_value = "0")]
    pub(crate) clothing: String,
    /// Shoes weight in kg
    #[arg(long, default_value = "0")]
    pub(crate) shoes: String,
    /// Bags weight in kg
    #[arg(long, default_value = "0")]
    pub(crate) bags: String,
    /// Pots and pans weight in kg
    #[arg(long, default_value = "0")]
    pub(crate) cookware: String,
    /// Number of computers
    #[arg(long, default_value = "0")]
    pub(crate) computers: String,
    /// Number of monitors
    #[arg(long, default_value = "0")]
    pub(crate) monitors: String,
    /// Number of phones
    #[arg(long, default_value = "0")]
    pub(crate) phones: String,
    /// Pickup address used for the service-area check
    #[arg(long)]
    pub(crate) address: Option<String>,
    /// Preferred pickup date (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct RegionArgs {
    /// Address text to check against the service area
    pub(crate) address: String,
}

#[derive(Args, Debug)]
pub(crate) struct FaqArgs {
    /// Filter questions and answers by keyword
    #[arg(long, default_value = "")]
    pub(crate) query: String,
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub(crate) page: usize,
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub(crate) per_page: usize,
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    print!("{}", render_quote(&args));
    Ok(())
}

pub(crate) fn run_region(args: RegionArgs) -> Result<(), AppError> {
    print!("{}", render_region(&RegionCatalog::standard(), &args.address));
    Ok(())
}

pub(crate) fn run_faq(args: FaqArgs) -> Result<(), AppError> {
    let page = FaqCatalog::standard().page(&args.query, args.page, args.per_page);
    print!("{}", render_faq(&page));
    Ok(())
}

fn quote_session(args: &QuoteArgs) -> (IntakeSession, Option<&'static str>) {
    let mut session = IntakeSession::new();
    let fields = [
        (ItemCategory::Clothing, &args.clothing),
        (ItemCategory::Shoes, &args.shoes),
        (ItemCategory::Bags, &args.bags),
        (ItemCategory::Cookware, &args.cookware),
        (ItemCategory::Computer, &args.computers),
        (ItemCategory::Monitor, &args.monitors),
        (ItemCategory::Phone, &args.phones),
    ];
    for (category, raw) in fields {
        session.set_quantity_text(category, raw);
    }
    if let Some(address) = &args.address {
        session.set_address(address.as_str());
    }

    let date_notice = args
        .date
        .and_then(|date| session.select_date(date).err())
        .map(|rejection| rejection.notice());

    (session, date_notice)
}

pub(crate) fn render_quote(args: &QuoteArgs) -> String {
    let engine = PricingEngine::default();
    let regions = RegionCatalog::standard();
    let (session, date_notice) = quote_session(args);
    let eligibility = session.evaluate(&engine, &regions);
    let estimate = eligibility.estimate;

    let mut out = String::new();
    let _ = writeln!(out, "EcoPick settlement estimate");
    for category in ItemCategory::ALL {
        let quantity = session.quantities().get(category);
        if quantity > 0.0 {
            let _ = writeln!(
                out,
                "  {:<12} {:>6}{} x {:>5}원",
                category.label(),
                quantity,
                category.unit().suffix(),
                engine.table().unit_price(category)
            );
        }
    }
    let _ = writeln!(out, "Basic weight:      {}kg", estimate.basic_total_weight);
    let _ = writeln!(out, "Pickup fee type:   {}", estimate.fee_type().as_str());
    let _ = writeln!(out, "Basic amount:      {}원", estimate.basic_amount);
    let _ = writeln!(out, "Additional amount: {}원", estimate.additional_amount);
    let _ = writeln!(out, "Estimated amount:  {}원", estimate.estimated_amount);
    if let Some(advisory) = estimate.advisory() {
        let _ = writeln!(out, "Note: {advisory}");
    }
    if !estimate.is_minimum_met {
        let _ = writeln!(out, "Minimum not met: add clothing, shoes, or bags.");
    }

    let _ = writeln!(out, "Region:            {}", eligibility.region.label());
    if let Some(notice) = eligibility.region.notice() {
        let _ = writeln!(out, "  {notice}");
    }
    if let Some(notice) = date_notice {
        let _ = writeln!(out, "Date rejected:     {notice}");
    } else if let Some(date) = session.preferred_date() {
        let _ = writeln!(out, "Pickup date:       {date}");
    }
    let _ = writeln!(
        out,
        "Can submit:        {}",
        if eligibility.can_submit { "yes" } else { "no" }
    );
    out
}

pub(crate) fn render_region(regions: &RegionCatalog, address: &str) -> String {
    let status = regions.check(address);
    let mut out = format!("{} -> {}\n", address.trim(), status.label());
    match status {
        RegionStatus::Unavailable => {
            if let Some(notice) = status.notice() {
                let _ = writeln!(out, "{notice}");
            }
        }
        RegionStatus::Unknown => {
            let _ = writeln!(out, "Enter an address to check the service area.");
        }
        RegionStatus::Available => {}
    }
    out
}

pub(crate) fn render_faq(page: &FaqPage) -> String {
    let mut out = String::new();
    if page.query.is_empty() {
        let _ = writeln!(out, "FAQ (page {}/{})", page.page, page.total_pages.max(1));
    } else {
        let _ = writeln!(
            out,
            "FAQ matching \"{}\" (page {}/{}, {} total)",
            page.query,
            page.page,
            page.total_pages.max(1),
            page.total
        );
    }
    if page.items.is_empty() {
        let _ = writeln!(out, "  No questions found.");
    }
    for entry in &page.items {
        let _ = writeln!(out, "Q. {}", entry.question);
        let _ = writeln!(out, "A. {}\n", entry.answer);
    }
    out
}
