mod company;
pub use self::company::RawCompany;

mod page;
pub use self::page::PageContent;
