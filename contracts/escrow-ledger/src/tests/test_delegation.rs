#![cfg(test)]

use crate::errors::ContractErrors;
use crate::tests::test_utils::{assert_last_event, create_test_data, init_contract, TestData};
use soroban_sdk::testutils::{Address as _, MockAuth, MockAuthInvoke};
use soroban_sdk::{symbol_short, Address, Env, IntoVal};

#[test]
pub fn test_delegate_and_undelegate() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let baker: Address = Address::generate(&e);

    assert!(test_data
        .contract_client
        .try_delegate(&test_data.admin, &Some(baker.clone()), &0)
        .is_err());

    test_data
        .contract_client
        .mock_auths(&[MockAuth {
            address: &test_data.admin,
            invoke: &MockAuthInvoke {
                contract: &test_data.contract_client.address,
                fn_name: "delegate",
                args: (test_data.admin.clone(), Some(baker.clone()), 0u128).into_val(&e),
                sub_invokes: &[],
            },
        }])
        .delegate(&test_data.admin, &Some(baker.clone()), &0);

    assert_last_event(
        &e,
        &test_data.contract_client.address,
        (symbol_short!("delegate"),).into_val(&e),
        Some(baker.clone()).into_val(&e),
    );
    assert_eq!(test_data.contract_client.get_baker(), Some(baker.clone()));

    test_data
        .contract_client
        .mock_all_auths()
        .delegate(&test_data.admin, &None, &0);

    assert_last_event(
        &e,
        &test_data.contract_client.address,
        (symbol_short!("delegate"),).into_val(&e),
        Option::<Address>::None.into_val(&e),
    );
    assert_eq!(test_data.contract_client.get_baker(), None);
}

#[test]
pub fn test_delegate_validations() {
    let e: Env = Env::default();
    e.mock_all_auths();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let baker: Address = Address::generate(&e);
    test_data
        .contract_client
        .delegate(&test_data.admin, &Some(baker.clone()), &0);

    let unauthorized_error = test_data
        .contract_client
        .try_delegate(&Address::generate(&e), &None, &0)
        .unwrap_err()
        .unwrap();
    assert_eq!(&unauthorized_error, &ContractErrors::Unauthorized.into());

    let unexpected_payment_error = test_data
        .contract_client
        .try_delegate(&test_data.admin, &None, &1)
        .unwrap_err()
        .unwrap();
    assert_eq!(
        &unexpected_payment_error,
        &ContractErrors::UnexpectedPayment.into()
    );

    // Rejected calls keep the previous delegate
    assert_eq!(test_data.contract_client.get_baker(), Some(baker));
    assert_eq!(test_data.contract_client.get_collateral(), 0);
}
