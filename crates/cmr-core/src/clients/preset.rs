//! Mock client fixtures for the clients screen.

use super::model::{ClientRecord, ClientStatus, TaxFileStatus};

fn client(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    company: &str,
    status: ClientStatus,
    tax_file_status: TaxFileStatus,
    tax_returns: u32,
) -> ClientRecord {
    ClientRecord {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        company: company.to_string(),
        status,
        tax_file_status,
        tax_returns,
    }
}

/// Returns the demo client book shown on the clients screen.
pub fn default_clients() -> Vec<ClientRecord> {
    vec![
        client(
            "1",
            "Robert Johnson",
            "robert@johnsonllc.com",
            "(555) 123-4567",
            "Johnson LLC",
            ClientStatus::Active,
            TaxFileStatus::Processing,
            3,
        ),
        client(
            "2",
            "Susan Smith",
            "susan@smithenterprises.com",
            "(555) 234-5678",
            "Smith Enterprises",
            ClientStatus::Pending,
            TaxFileStatus::NotStarted,
            1,
        ),
        client(
            "3",
            "David Lee",
            "david@acmecorp.com",
            "(555) 345-6789",
            "Acme Corporation",
            ClientStatus::Completed,
            TaxFileStatus::Completed,
            2,
        ),
        client(
            "4",
            "Maria Garcia",
            "maria@techstart.com",
            "(555) 456-7890",
            "Tech Startups Inc",
            ClientStatus::Active,
            TaxFileStatus::AlmostReady,
            2,
        ),
        client(
            "5",
            "James Wilson",
            "james@wilsongroup.com",
            "(555) 567-8901",
            "Wilson Group",
            ClientStatus::Active,
            TaxFileStatus::Processing,
            1,
        ),
        client(
            "6",
            "Patricia Moore",
            "patricia@mooreservices.com",
            "(555) 678-9012",
            "Moore Professional Services",
            ClientStatus::Completed,
            TaxFileStatus::Completed,
            4,
        ),
        client(
            "7",
            "Michael Taylor",
            "michael@taylorconsulting.com",
            "(555) 789-0123",
            "Taylor Consulting",
            ClientStatus::Pending,
            TaxFileStatus::NotStarted,
            1,
        ),
    ]
}
