use crate::access_utils::require_governance;
use crate::errors::FundControllerError;
use crate::events::{Events, GovernanceEvents, HarvestEvents};
use crate::external::{QuoterClient, SwapRouterClient};
use crate::guard::check_slippage;
use crate::route_validator::validate_harvest_route;
use crate::storage::{get_harvest_path, get_quoter, get_reward_token, get_swap_router};
use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::token::Client as SorobanTokenClient;
use soroban_sdk::{log, panic_with_error, vec, Address, Bytes, Env, IntoVal, Symbol};
use utils::utils::{from_token_amount, to_token_amount};

pub(crate) fn set_harvest_path(e: &Env, caller: &Address, token: &Address, route: &Bytes) {
    require_governance(e, caller);
    validate_harvest_route(e, route, token);
    crate::storage::set_harvest_path(e, token, route);
    Events::new(e).set_harvest_path(token.clone(), route.clone());
}

// harvest
// Sells `amount` of `token` held by the controller into the reward token and burns the output.
//
// Arguments:
//   - e: The Soroban environment.
//   - token: Token accumulated by the controller.
//   - amount: Amount to sell, at most the controller balance.
//
// Returns:
//   - Amount of reward token burned.
pub(crate) fn harvest(e: &Env, token: &Address, amount: u128) -> u128 {
    if amount == 0 {
        panic_with_error!(e, FundControllerError::InvalidParameter);
    }

    let controller = e.current_contract_address();
    let balance = from_token_amount(e, SorobanTokenClient::new(e, token).balance(&controller));
    if balance < amount {
        panic_with_error!(e, FundControllerError::InsufficientBalance);
    }
    let path = match get_harvest_path(e, token) {
        Some(v) => v,
        None => panic_with_error!(e, FundControllerError::NoRoute),
    };

    let router = get_swap_router(e);
    let ideal_out = QuoterClient::new(e, &get_quoter(e)).quote_exact_input(&path, &amount);

    e.authorize_as_current_contract(vec![
        e,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: token.clone(),
                fn_name: Symbol::new(e, "transfer"),
                args: (controller.clone(), router.clone(), to_token_amount(e, amount))
                    .into_val(e),
            },
            sub_invocations: vec![e],
        }),
    ]);
    let amount_out =
        SwapRouterClient::new(e, &router).swap_exact_input(&controller, &path, &amount, &0);
    check_slippage(e, ideal_out, amount_out);

    log!(e, "harvest burn", amount, amount_out);
    SorobanTokenClient::new(e, &get_reward_token(e)).burn(&controller, &to_token_amount(e, amount_out));
    Events::new(e).harvest(token.clone(), amount, amount_out);
    amount_out
}
