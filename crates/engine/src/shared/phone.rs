//! Нормализация телефонных номеров.
//!
//! Телефон — единственный надёжный ключ идентичности сотрудника между
//! источниками (записи членства и приглашения).

/// Ключ идентичности: номер без пробельных символов.
///
/// Сравнение намеренно узкое: "+7 700 000 00 00" и "+77000000000" — один
/// человек, но "+7..." и "8..." остаются разными ключами. Поведение
/// зафиксировано тестом; унификация префиксов изменила бы состав ростера.
pub fn identity_key(phone: &str) -> String {
    phone.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Проверка номера перед отправкой приглашения
pub fn validate_phone(phone: &str) -> Result<(), String> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 10 || digits.len() > 15 {
        return Err("Номер телефона должен содержать от 10 до 15 цифр".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_all_whitespace() {
        assert_eq!(identity_key("+7 700 000 00 00"), "+77000000000");
        assert_eq!(identity_key("\t+7 700 000-00-00 "), "+7700000-00-00");
    }

    #[test]
    fn phone_prefix_variants_stay_distinct_keys() {
        // "8" and "+7" versions of one number are different identities
        assert_ne!(identity_key("8 700 000 00 00"), identity_key("+7 700 000 00 00"));
    }

    #[test]
    fn validate_phone_checks_digit_count() {
        assert!(validate_phone("+7 700 000 00 00").is_ok());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("+7 700 000 00 00 123 456").is_err());
    }
}
