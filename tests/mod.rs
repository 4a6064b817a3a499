mod support;
mod tech_debt_api_test;
