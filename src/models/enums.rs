use crate::db::StoreError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
///
/// Serde goes through the wire string rather than the variant name, so
/// persisted blobs keep the mobile client's values ("1 day", "premium").
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = StoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(StoreError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

str_enum!(ProviderCategory {
    Emergency => "emergency",
    Standard => "standard",
    Premium => "premium",
});

str_enum!(ReminderPolicy {
    OneDay => "1 day",
    TwoHours => "2 hours",
    ThirtyMinutes => "30 minutes",
});

str_enum!(DispatchStatus {
    Idle => "idle",
    Active => "active",
    Resolved => "resolved",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn provider_category_round_trip() {
        for (variant, s) in [
            (ProviderCategory::Emergency, "emergency"),
            (ProviderCategory::Standard, "standard"),
            (ProviderCategory::Premium, "premium"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(ProviderCategory::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn reminder_policy_round_trip() {
        for (variant, s) in [
            (ReminderPolicy::OneDay, "1 day"),
            (ReminderPolicy::TwoHours, "2 hours"),
            (ReminderPolicy::ThirtyMinutes, "30 minutes"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(ReminderPolicy::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn dispatch_status_round_trip() {
        for (variant, s) in [
            (DispatchStatus::Idle, "idle"),
            (DispatchStatus::Active, "active"),
            (DispatchStatus::Resolved, "resolved"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(DispatchStatus::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn serde_uses_wire_strings() {
        let json = serde_json::to_string(&ReminderPolicy::TwoHours).unwrap();
        assert_eq!(json, "\"2 hours\"");

        let parsed: ReminderPolicy = serde_json::from_str("\"30 minutes\"").unwrap();
        assert_eq!(parsed, ReminderPolicy::ThirtyMinutes);
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(ProviderCategory::from_str("deluxe").is_err());
        assert!(ReminderPolicy::from_str("2h").is_err());
        assert!(DispatchStatus::from_str("").is_err());
    }
}
