use crate::models::ratio::{ Importance, RatioCategory, RatioDefinition, ResultUnit };

/// The fixed catalog of real-estate ratios, in display order
pub static RATIOS: [RatioDefinition; 21] = [
    RatioDefinition {
        id: 1,
        title: "Gross Rental Yield",
        description: "Annual rental income as a percentage of the purchase price, before any expenses.",
        formula: "(Annual Rental Income / Property Price) × 100",
        category: RatioCategory::Returns,
        importance: Importance::Critical,
        color: "#30D158",
        inputs: &["annualRentalIncome", "propertyPrice"],
        unit: ResultUnit::Percent,
    },
    RatioDefinition {
        id: 2,
        title: "Net Rental Yield",
        description: "Rental income left after annual expenses, as a percentage of the purchase price.",
        formula: "((Annual Rental Income - Annual Expenses) / Property Price) × 100",
        category: RatioCategory::Returns,
        importance: Importance::Critical,
        color: "#0A84FF",
        inputs: &["annualRentalIncome", "annualExpenses", "propertyPrice"],
        unit: ResultUnit::Percent,
    },
    RatioDefinition {
        id: 3,
        title: "Price per Square Foot",
        description: "Purchase price divided by total floor area; useful for comparing listings of different sizes.",
        formula: "Property Price / Total Area",
        category: RatioCategory::Valuation,
        importance: Importance::High,
        color: "#FF9F0A",
        inputs: &["propertyPrice", "totalArea"],
        unit: ResultUnit::Plain,
    },
    RatioDefinition {
        id: 4,
        title: "Rent per Square Foot",
        description: "Monthly rent divided by total floor area.",
        formula: "Monthly Rent / Total Area",
        category: RatioCategory::Valuation,
        importance: Importance::Medium,
        color: "#FFD60A",
        inputs: &["monthlyRent", "totalArea"],
        unit: ResultUnit::Plain,
    },
    RatioDefinition {
        id: 5,
        title: "Net Operating Income",
        description: "Annual rental income minus operating expenses, before debt service.",
        formula: "Annual Rental Income - Operating Expenses",
        category: RatioCategory::Income,
        importance: Importance::Critical,
        color: "#64D2FF",
        inputs: &["annualRentalIncome", "operatingExpenses"],
        unit: ResultUnit::Currency,
    },
    RatioDefinition {
        id: 6,
        title: "Cash Flow",
        description: "Money left each year after expenses and loan payments.",
        formula: "(Annual Rental Income - Annual Expenses) - Annual Loan Payments",
        category: RatioCategory::Income,
        importance: Importance::Critical,
        color: "#5E5CE6",
        inputs: &["annualRentalIncome", "annualExpenses", "annualLoanPayments"],
        unit: ResultUnit::Currency,
    },
    RatioDefinition {
        id: 7,
        title: "Operating Expense Ratio",
        description: "Share of rental income consumed by operating expenses.",
        formula: "(Operating Expenses / Annual Rental Income) × 100",
        category: RatioCategory::Expenses,
        importance: Importance::High,
        color: "#FF453A",
        inputs: &["operatingExpenses", "annualRentalIncome"],
        unit: ResultUnit::Percent,
    },
    RatioDefinition {
        id: 8,
        title: "Capitalization Rate",
        description: "Net operating income as a percentage of current property value.",
        formula: "((Annual Rental Income - Annual Expenses) / Property Value) × 100",
        category: RatioCategory::Returns,
        importance: Importance::Critical,
        color: "#BF5AF2",
        inputs: &["annualRentalIncome", "annualExpenses", "propertyValue"],
        unit: ResultUnit::Percent,
    },
    RatioDefinition {
        id: 9,
        title: "Cash on Cash Return",
        description: "Annual pre-tax cash flow relative to the cash actually invested.",
        formula: "(((Annual Rental Income - Annual Expenses) - Annual Loan Payments) / Cash Invested) × 100",
        category: RatioCategory::Returns,
        importance: Importance::Critical,
        color: "#30D158",
        inputs: &["annualRentalIncome", "annualExpenses", "annualLoanPayments", "cashInvested"],
        unit: ResultUnit::Percent,
    },
    RatioDefinition {
        id: 10,
        title: "Loan to Value Ratio",
        description: "Loan amount as a percentage of property value; lenders use it to gauge risk.",
        formula: "(Loan Amount / Property Value) × 100",
        category: RatioCategory::Financing,
        importance: Importance::High,
        color: "#FF9F0A",
        inputs: &["loanAmount", "propertyValue"],
        unit: ResultUnit::Percent,
    },
    RatioDefinition {
        id: 11,
        title: "Debt Service Coverage Ratio",
        description: "How many times net operating income covers the annual loan payments.",
        formula: "(Annual Rental Income - Annual Expenses) / Annual Loan Payments",
        category: RatioCategory::Financing,
        importance: Importance::Critical,
        color: "#0A84FF",
        inputs: &["annualRentalIncome", "annualExpenses", "annualLoanPayments"],
        unit: ResultUnit::Plain,
    },
    RatioDefinition {
        id: 12,
        title: "Occupancy Rate",
        description: "Percentage of days in the period the property was rented.",
        formula: "(Days Rented / Total Days) × 100",
        category: RatioCategory::Occupancy,
        importance: Importance::High,
        color: "#64D2FF",
        inputs: &["daysRented", "totalDays"],
        unit: ResultUnit::Percent,
    },
    RatioDefinition {
        id: 13,
        title: "Vacancy Rate",
        description: "Percentage of days in the period the property stood empty.",
        formula: "(Days Vacant / Total Days) × 100",
        category: RatioCategory::Occupancy,
        importance: Importance::High,
        color: "#FF453A",
        inputs: &["daysVacant", "totalDays"],
        unit: ResultUnit::Percent,
    },
    RatioDefinition {
        id: 14,
        title: "Gross Rent Multiplier",
        description: "Purchase price expressed as a multiple of gross annual rent.",
        formula: "Property Price / Annual Rental Income",
        category: RatioCategory::Valuation,
        importance: Importance::Medium,
        color: "#FFD60A",
        inputs: &["propertyPrice", "annualRentalIncome"],
        unit: ResultUnit::Plain,
    },
    RatioDefinition {
        id: 15,
        title: "Debt Yield",
        description: "Net operating income as a percentage of the loan amount.",
        formula: "((Annual Rental Income - Annual Expenses) / Loan Amount) × 100",
        category: RatioCategory::Financing,
        importance: Importance::Medium,
        color: "#5E5CE6",
        inputs: &["annualRentalIncome", "annualExpenses", "loanAmount"],
        unit: ResultUnit::Percent,
    },
    RatioDefinition {
        id: 16,
        title: "Break-Even Ratio",
        description: "Share of rental income needed to cover operating expenses and debt service.",
        formula: "((Operating Expenses + Annual Loan Payments) / Annual Rental Income) × 100",
        category: RatioCategory::Expenses,
        importance: Importance::High,
        color: "#FF9F0A",
        inputs: &["operatingExpenses", "annualLoanPayments", "annualRentalIncome"],
        unit: ResultUnit::Percent,
    },
    RatioDefinition {
        id: 17,
        title: "One Percent Rule",
        description: "Monthly rent as a percentage of the purchase price; a quick screening rule of thumb.",
        formula: "(Monthly Rent / Property Price) × 100",
        category: RatioCategory::Returns,
        importance: Importance::Medium,
        color: "#30D158",
        inputs: &["monthlyRent", "propertyPrice"],
        unit: ResultUnit::Percent,
    },
    RatioDefinition {
        id: 18,
        title: "Return on Investment",
        description: "Annual cash flow as a percentage of the cash invested.",
        formula: "(Annual Cash Flow / Cash Invested) × 100",
        category: RatioCategory::Returns,
        importance: Importance::High,
        color: "#BF5AF2",
        inputs: &["annualCashFlow", "cashInvested"],
        unit: ResultUnit::Percent,
    },
    RatioDefinition {
        id: 19,
        title: "Internal Rate of Return",
        description: "Simplified: average annual cash flow as a percentage of the initial investment.",
        formula: "(Average of Cash Flows / Initial Investment) × 100",
        category: RatioCategory::Returns,
        importance: Importance::Medium,
        color: "#64D2FF",
        inputs: &["cashFlows", "initialInvestment"],
        unit: ResultUnit::Percent,
    },
    RatioDefinition {
        id: 20,
        title: "Expense to Value Ratio",
        description: "Operating expenses as a percentage of property value.",
        formula: "(Operating Expenses / Property Value) × 100",
        category: RatioCategory::Expenses,
        importance: Importance::Medium,
        color: "#FF453A",
        inputs: &["operatingExpenses", "propertyValue"],
        unit: ResultUnit::Percent,
    },
    RatioDefinition {
        id: 21,
        title: "Gross Profit Margin",
        description: "Gross profit as a percentage of revenue.",
        formula: "(Gross Profit / Revenue) × 100",
        category: RatioCategory::Income,
        importance: Importance::Medium,
        color: "#0A84FF",
        inputs: &["grossProfit", "revenue"],
        unit: ResultUnit::Percent,
    },
];

pub fn all() -> &'static [RatioDefinition] {
    &RATIOS
}

pub fn find(id: u32) -> Option<&'static RatioDefinition> {
    RATIOS.iter().find(|r| r.id == id)
}

/// Ratios whose title, description or category contain `query`, case-insensitively.
/// An empty query matches everything.
pub fn search(query: &str) -> Vec<&'static RatioDefinition> {
    RATIOS.iter().filter(|r| r.matches(query)).collect()
}
