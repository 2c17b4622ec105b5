use std::collections::BTreeMap;

use log::warn;

use crate::implementations::catalog;
use crate::models::inputs::RatioInputs;

// Missing inputs read as NaN, so a denominator is unusable when it is NaN or zero.
fn is_unusable(denominator: f64) -> bool {
    denominator.is_nan() || denominator == 0.0
}

/// Evaluate ratio `ratio_id`. Unknown ids yield 0 and log a warning.
pub fn evaluate(ratio_id: u32, inputs: &RatioInputs) -> f64 {
    match try_evaluate(ratio_id, inputs) {
        Some(result) => result,
        None => {
            warn!("No formula found for ratio ID: {}", ratio_id);
            0.0
        }
    }
}

/// Evaluate every formula in the catalog against the same inputs
pub fn evaluate_all(inputs: &RatioInputs) -> BTreeMap<u32, f64> {
    catalog::all()
        .iter()
        .filter_map(|ratio| try_evaluate(ratio.id, inputs).map(|result| (ratio.id, result)))
        .collect()
}

/// Evaluate ratio `ratio_id`, `None` if the id is not in the catalog
pub fn try_evaluate(ratio_id: u32, inputs: &RatioInputs) -> Option<f64> {
    let result = match ratio_id {
        1 => gross_rental_yield(inputs),
        2 => net_rental_yield(inputs),
        3 => price_per_area(inputs),
        4 => rent_per_area(inputs),
        5 => net_operating_income(inputs),
        6 => cash_flow(inputs),
        7 => operating_expense_ratio(inputs),
        8 => capitalization_rate(inputs),
        9 => cash_on_cash_return(inputs),
        10 => loan_to_value(inputs),
        11 => debt_service_coverage(inputs),
        12 => occupancy_rate(inputs),
        13 => vacancy_rate(inputs),
        14 => gross_rent_multiplier(inputs),
        15 => debt_yield(inputs),
        16 => break_even_ratio(inputs),
        17 => one_percent_rule(inputs),
        18 => return_on_investment(inputs),
        19 => simplified_irr(inputs),
        20 => expense_to_value(inputs),
        21 => gross_profit_margin(inputs),
        _ => {
            return None;
        }
    };
    Some(result)
}

fn gross_rental_yield(inputs: &RatioInputs) -> f64 {
    let annual_rental_income = inputs.number("annualRentalIncome");
    let property_price = inputs.number("propertyPrice");
    if is_unusable(property_price) {
        return 0.0;
    }
    (annual_rental_income / property_price) * 100.0
}

fn net_rental_yield(inputs: &RatioInputs) -> f64 {
    let annual_rental_income = inputs.number("annualRentalIncome");
    let annual_expenses = inputs.number("annualExpenses");
    let property_price = inputs.number("propertyPrice");
    if is_unusable(property_price) {
        return 0.0;
    }
    let net_income = annual_rental_income - annual_expenses;
    (net_income / property_price) * 100.0
}

fn price_per_area(inputs: &RatioInputs) -> f64 {
    let property_price = inputs.number("propertyPrice");
    let total_area = inputs.number("totalArea");
    if is_unusable(total_area) {
        return 0.0;
    }
    property_price / total_area
}

fn rent_per_area(inputs: &RatioInputs) -> f64 {
    let monthly_rent = inputs.number("monthlyRent");
    let total_area = inputs.number("totalArea");
    if is_unusable(total_area) {
        return 0.0;
    }
    monthly_rent / total_area
}

// No denominator, no guard: missing inputs propagate as NaN.
fn net_operating_income(inputs: &RatioInputs) -> f64 {
    let annual_rental_income = inputs.number("annualRentalIncome");
    let operating_expenses = inputs.number("operatingExpenses");
    annual_rental_income - operating_expenses
}

fn cash_flow(inputs: &RatioInputs) -> f64 {
    let annual_rental_income = inputs.number("annualRentalIncome");
    let annual_expenses = inputs.number("annualExpenses");
    let annual_loan_payments = inputs.number("annualLoanPayments");
    annual_rental_income - annual_expenses - annual_loan_payments
}

fn operating_expense_ratio(inputs: &RatioInputs) -> f64 {
    let operating_expenses = inputs.number("operatingExpenses");
    let annual_rental_income = inputs.number("annualRentalIncome");
    if is_unusable(annual_rental_income) {
        return 0.0;
    }
    (operating_expenses / annual_rental_income) * 100.0
}

fn capitalization_rate(inputs: &RatioInputs) -> f64 {
    let annual_rental_income = inputs.number("annualRentalIncome");
    let annual_expenses = inputs.number("annualExpenses");
    let property_value = inputs.number("propertyValue");
    if is_unusable(property_value) {
        return 0.0;
    }
    let noi = annual_rental_income - annual_expenses;
    (noi / property_value) * 100.0
}

fn cash_on_cash_return(inputs: &RatioInputs) -> f64 {
    let annual_rental_income = inputs.number("annualRentalIncome");
    let annual_expenses = inputs.number("annualExpenses");
    let annual_loan_payments = inputs.number("annualLoanPayments");
    let cash_invested = inputs.number("cashInvested");
    if is_unusable(cash_invested) {
        return 0.0;
    }
    let cash_flow = annual_rental_income - annual_expenses - annual_loan_payments;
    (cash_flow / cash_invested) * 100.0
}

fn loan_to_value(inputs: &RatioInputs) -> f64 {
    let loan_amount = inputs.number("loanAmount");
    let property_value = inputs.number("propertyValue");
    if is_unusable(property_value) {
        return 0.0;
    }
    (loan_amount / property_value) * 100.0
}

fn debt_service_coverage(inputs: &RatioInputs) -> f64 {
    let annual_rental_income = inputs.number("annualRentalIncome");
    let annual_expenses = inputs.number("annualExpenses");
    let annual_loan_payments = inputs.number("annualLoanPayments");
    if is_unusable(annual_loan_payments) {
        return 0.0;
    }
    let noi = annual_rental_income - annual_expenses;
    noi / annual_loan_payments
}

fn occupancy_rate(inputs: &RatioInputs) -> f64 {
    let days_rented = inputs.number("daysRented");
    let total_days = inputs.number("totalDays");
    if is_unusable(total_days) {
        return 0.0;
    }
    (days_rented / total_days) * 100.0
}

fn vacancy_rate(inputs: &RatioInputs) -> f64 {
    let days_vacant = inputs.number("daysVacant");
    let total_days = inputs.number("totalDays");
    if is_unusable(total_days) {
        return 0.0;
    }
    (days_vacant / total_days) * 100.0
}

fn gross_rent_multiplier(inputs: &RatioInputs) -> f64 {
    let property_price = inputs.number("propertyPrice");
    let annual_rental_income = inputs.number("annualRentalIncome");
    if is_unusable(annual_rental_income) {
        return 0.0;
    }
    property_price / annual_rental_income
}

fn debt_yield(inputs: &RatioInputs) -> f64 {
    let annual_rental_income = inputs.number("annualRentalIncome");
    let annual_expenses = inputs.number("annualExpenses");
    let loan_amount = inputs.number("loanAmount");
    if is_unusable(loan_amount) {
        return 0.0;
    }
    let noi = annual_rental_income - annual_expenses;
    (noi / loan_amount) * 100.0
}

fn break_even_ratio(inputs: &RatioInputs) -> f64 {
    let operating_expenses = inputs.number("operatingExpenses");
    let annual_loan_payments = inputs.number("annualLoanPayments");
    let annual_rental_income = inputs.number("annualRentalIncome");
    if is_unusable(annual_rental_income) {
        return 0.0;
    }
    ((operating_expenses + annual_loan_payments) / annual_rental_income) * 100.0
}

fn one_percent_rule(inputs: &RatioInputs) -> f64 {
    let monthly_rent = inputs.number("monthlyRent");
    let property_price = inputs.number("propertyPrice");
    if is_unusable(property_price) {
        return 0.0;
    }
    (monthly_rent / property_price) * 100.0
}

fn return_on_investment(inputs: &RatioInputs) -> f64 {
    let annual_cash_flow = inputs.number("annualCashFlow");
    let cash_invested = inputs.number("cashInvested");
    if is_unusable(cash_invested) {
        return 0.0;
    }
    (annual_cash_flow / cash_invested) * 100.0
}

// Average annual cash flow over the initial investment, not a true IRR.
fn simplified_irr(inputs: &RatioInputs) -> f64 {
    let cash_flows = match inputs.series("cashFlows") {
        Some(flows) if !flows.is_empty() => flows,
        _ => {
            return 0.0;
        }
    };
    let initial_investment = inputs.number("initialInvestment");

    let total_cash_flow: f64 = cash_flows.iter().sum();
    let average_annual_cash_flow = total_cash_flow / (cash_flows.len() as f64);

    if is_unusable(initial_investment) {
        return 0.0;
    }
    (average_annual_cash_flow / initial_investment) * 100.0
}

fn expense_to_value(inputs: &RatioInputs) -> f64 {
    let operating_expenses = inputs.number("operatingExpenses");
    let property_value = inputs.number("propertyValue");
    if is_unusable(property_value) {
        return 0.0;
    }
    (operating_expenses / property_value) * 100.0
}

fn gross_profit_margin(inputs: &RatioInputs) -> f64 {
    let gross_profit = inputs.number("grossProfit");
    let revenue = inputs.number("revenue");
    if is_unusable(revenue) {
        return 0.0;
    }
    (gross_profit / revenue) * 100.0
}
