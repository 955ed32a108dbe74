use super::*;

#[test]
fn test_add_beans_prepends_income() {
    let (mut manager, storage) = fresh_manager();
    manager.add_beans(20, "参与投票").unwrap();

    assert_eq!(manager.user_beans(), 120);
    let tx = &manager.transactions()[0];
    assert_eq!(tx.kind, TransactionType::Income);
    assert_eq!(tx.amount, 20);
    assert_eq!(tx.source, "参与投票");
    assert_eq!(manager.transactions().len(), 2);

    assert_eq!(reload(&storage).user_beans(), 120);
}

#[test]
fn test_add_zero_is_still_booked() {
    let (mut manager, _) = fresh_manager();
    manager.add_beans(0, "测试").unwrap();
    assert_eq!(manager.user_beans(), 100);
    assert_eq!(manager.transactions().len(), 2);
}

#[test]
fn test_add_beans_saturates_at_max() {
    let mut manager = manager_with_beans(u64::MAX);
    manager.add_beans(1, "参与投票").unwrap();
    assert_eq!(manager.user_beans(), u64::MAX);
    assert_eq!(manager.transactions()[0].amount, 1);
}

#[test]
fn test_reward_catalogue_credits() {
    let (mut manager, _) = fresh_manager();
    manager.reward(Reward::Vote).unwrap();
    manager.reward(Reward::Recommendation).unwrap();
    assert_eq!(manager.user_beans(), 150);
    assert_eq!(manager.transactions()[0].source, "推荐美食");
    assert_eq!(manager.transactions()[1].source, "参与投票");
}

#[test]
fn test_ledger_is_newest_first() {
    let mut manager = manager_with_beans(1000);
    let badge = manager.shop_product("sp4").unwrap().clone();

    manager.add_beans(20, "参与投票").unwrap();
    assert_eq!(manager.transactions()[0].source, "参与投票");

    manager.redeem_product(&badge, address()).unwrap();
    assert_eq!(manager.transactions()[0].source, "兑换-立蛋挑战纪念章");

    manager.record_lottery_win(LotteryPrize::Beans, 50, None).unwrap();
    assert_eq!(manager.transactions()[0].source, "幸运抽奖");
    assert_eq!(manager.transactions().last().unwrap().source, "首次登录");

    manager.record_lottery_win(LotteryPrize::Eggs, 1, Some(address())).unwrap();
    assert_eq!(manager.orders()[0].kind, OrderType::Lottery);
    assert_eq!(manager.orders()[1].kind, OrderType::Redeem);
}

#[test]
fn test_lottery_beans_credit_balance() {
    let (mut manager, _) = fresh_manager();
    manager.record_lottery_win(LotteryPrize::Beans, 50, None).unwrap();

    assert_eq!(manager.user_beans(), 150);
    let tx = &manager.transactions()[0];
    assert_eq!(tx.kind, TransactionType::Income);
    assert_eq!(tx.amount, 50);
    assert_eq!(tx.source, "幸运抽奖");
    assert!(manager.orders().is_empty());
}

#[test]
fn test_lottery_eggs_create_free_order() {
    let (mut manager, storage) = fresh_manager();
    manager.record_lottery_win(LotteryPrize::Eggs, 1, Some(address())).unwrap();

    assert_eq!(manager.user_beans(), 100);
    assert_eq!(manager.transactions().len(), 1);

    let order = &manager.orders()[0];
    assert_eq!(order.kind, OrderType::Lottery);
    assert_eq!(order.amount, 0);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.product_name, "春分好运鸡蛋 (抽奖)");
    assert_eq!(order.address, Some(address()));

    assert_eq!(reload(&storage).orders(), manager.orders());
}

#[test]
fn test_orders_carry_configured_user() {
    let storage = MemoryStore::new();
    let mut manager = DataManager::load_for_user(storage, "user_42").unwrap();
    manager.record_lottery_win(LotteryPrize::Eggs, 1, None).unwrap();
    assert_eq!(manager.user_id(), "user_42");
    assert_eq!(manager.orders()[0].user_id, "user_42");
    assert!(manager.orders()[0].address.is_none());
}
