use aws_sdk_route53::types::{AliasTarget, ResourceRecord, ResourceRecordSet, RrType};

use crate::records::{DnsRecord, RecordTarget, RecordType};
use crate::route53::errors::Route53Error;

/// A hosted zone as this tool sees it: Route 53 id plus normalized name.
#[derive(Debug, Clone, PartialEq)]
pub struct HostedZone {
    pub id: String,
    pub name: String,
}

/// Convert a listed record set into the domain model.
///
/// Record sets with a type outside `RecordType` come back as
/// `UnsupportedRecord` so callers can skip them instead of failing the run.
pub fn record_from_rrset(rrset: &ResourceRecordSet) -> Result<DnsRecord, Route53Error> {
    let record_type: RecordType =
        rrset
            .r#type
            .as_str()
            .parse()
            .map_err(|_| Route53Error::UnsupportedRecord {
                name: rrset.name.clone(),
                record_type: rrset.r#type.as_str().to_string(),
            })?;

    let target = match &rrset.alias_target {
        Some(alias) => RecordTarget::Alias {
            dns_name: alias.dns_name.clone(),
            hosted_zone_id: alias.hosted_zone_id.clone(),
            evaluate_target_health: alias.evaluate_target_health,
        },
        None => RecordTarget::Values(
            rrset
                .resource_records()
                .iter()
                .map(|record| record.value.clone())
                .collect(),
        ),
    };

    Ok(DnsRecord {
        name: rrset.name.clone(),
        record_type,
        target,
        ttl: rrset.ttl,
    })
}

/// Build the record set for a DELETE or UPSERT change. Route 53 requires the
/// submitted set to match the stored one, so everything captured at listing
/// time goes back in.
pub fn rrset_from_record(record: &DnsRecord) -> Result<ResourceRecordSet, Route53Error> {
    let mut builder = ResourceRecordSet::builder()
        .name(&record.name)
        .r#type(RrType::from(record.record_type.as_str()));

    match &record.target {
        RecordTarget::Alias {
            dns_name,
            hosted_zone_id,
            evaluate_target_health,
        } => {
            builder = builder.alias_target(
                AliasTarget::builder()
                    .hosted_zone_id(hosted_zone_id)
                    .dns_name(dns_name)
                    .evaluate_target_health(*evaluate_target_health)
                    .build()?,
            );
        }
        RecordTarget::Values(values) => {
            for value in values {
                builder =
                    builder.resource_records(ResourceRecord::builder().value(value).build()?);
            }
            if let Some(ttl) = record.ttl {
                builder = builder.ttl(ttl);
            }
        }
    }

    Ok(builder.build()?)
}
