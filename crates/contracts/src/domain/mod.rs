pub mod common;

pub mod a001_company_account;
pub mod a002_industry;
