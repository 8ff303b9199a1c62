mod case_api_tests;
mod financial_api_tests;
