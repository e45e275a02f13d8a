//! End-to-end flow over the compatibility surface: startup version
//! detection, then counting, hand resolution, binding probes, packet
//! dispatch and item tokens against an in-memory host fixture.

use serde_json::json;
use shop_compat::{
    count_similar, decode_item, dispatch, dispatch_or_log, encode_item, is_uuid, Actor, ActorId,
    BindingNamespace, BindingRegistry, Container, ContainerKind, DispatchError, Hand, HandHolder,
    HostBinding, HostContext, ItemDescriptor, ItemStack, Packet, RawConnection,
    OFFHAND_STORAGE_SLOT,
};
use std::any::Any;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct FixtureInventory {
    slots: Vec<Option<ItemStack>>,
}

impl FixtureInventory {
    fn new() -> Self {
        Self {
            slots: vec![None; 41],
        }
    }
}

impl Container for FixtureInventory {
    type Item = ItemStack;

    fn kind(&self) -> ContainerKind {
        ContainerKind::PlayerOwned
    }

    fn size(&self) -> usize {
        self.slots.len()
    }

    fn item(&self, slot: usize) -> Option<&ItemStack> {
        self.slots.get(slot).and_then(|s| s.as_ref())
    }
}

struct FixtureConnection {
    sent: AtomicUsize,
}

impl RawConnection for FixtureConnection {
    fn send_raw(&self, _packet: &Packet) -> io::Result<()> {
        self.sent.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct FixturePlayer {
    id: ActorId,
    main_hand: Option<ItemStack>,
    off_hand: Option<ItemStack>,
    connection: Option<FixtureConnection>,
}

impl HandHolder for FixturePlayer {
    type Item = ItemStack;

    fn held_item(&self, hand: Hand) -> Option<&ItemStack> {
        match hand {
            Hand::Main => self.main_hand.as_ref(),
            Hand::Off => self.off_hand.as_ref(),
        }
    }
}

impl Actor for FixturePlayer {
    fn id(&self) -> ActorId {
        self.id
    }

    fn connection(&self) -> Option<&dyn RawConnection> {
        self.connection.as_ref().map(|c| c as &dyn RawConnection)
    }
}

struct WindowAdapter;

impl HostBinding for WindowAdapter {
    fn name(&self) -> &str {
        "WindowItems"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn full_flow_on_a_dual_wield_host() {
    let ctx = HostContext::from_tag("v1_12_R1").unwrap();
    let caps = ctx.capabilities();

    // Counting sees body slots and the off-hand storage slot.
    let mut inventory = FixtureInventory::new();
    inventory.slots[3] = Some(ItemStack::new("emerald", 30));
    inventory.slots[OFFHAND_STORAGE_SLOT] = Some(ItemStack::new("emerald", 4));
    let emeralds = count_similar(&inventory, caps, &ItemStack::new("emerald", 1));
    assert_eq!(emeralds, 34);

    // Hand resolution falls back to the off hand.
    let player = FixturePlayer {
        id: ActorId::new(),
        main_hand: Some(ItemStack::air()),
        off_hand: Some(ItemStack::new("emerald", 1)),
        connection: Some(FixtureConnection {
            sent: AtomicUsize::new(0),
        }),
    };
    let held = caps.hand_model.preferred_hand(&player).unwrap();
    assert_eq!(held.material, "emerald");

    // Binding probes: present and absent integration points.
    let mut registry = BindingRegistry::new(*ctx.version());
    registry.register(BindingNamespace::Internal, Arc::new(WindowAdapter));
    assert!(registry.locate_internal("WindowItems").is_some());
    assert!(registry.locate_internal("NonexistentClassXYZ").is_none());

    // Dispatch goes out over the player's raw connection.
    let packet = Packet::new("window_items", json!({ "window": 1 }));
    assert!(dispatch_or_log(Some(&packet), &player));
    assert_eq!(
        player.connection.as_ref().unwrap().sent.load(Ordering::SeqCst),
        1
    );
}

#[test]
fn full_flow_on_a_legacy_host() {
    let ctx = HostContext::from_tag("v1_8_R3").unwrap();
    let caps = ctx.capabilities();

    // The off-hand storage slot is not part of the count.
    let mut inventory = FixtureInventory::new();
    inventory.slots[0] = Some(ItemStack::new("emerald", 3));
    inventory.slots[OFFHAND_STORAGE_SLOT] = Some(ItemStack::new("emerald", 2));
    let emeralds = count_similar(&inventory, caps, &ItemStack::new("emerald", 1));
    assert_eq!(emeralds, 3);

    // No off hand on a legacy host; no connection handle either, which
    // surfaces as a typed error and a logged `false`.
    let player = FixturePlayer {
        id: ActorId::new(),
        main_hand: Some(ItemStack::new("stick", 1)),
        off_hand: None,
        connection: None,
    };
    assert!(caps.hand_model.off_hand(&player).is_none());
    assert_eq!(
        caps.hand_model.preferred_hand(&player).unwrap().material,
        "stick"
    );

    let packet = Packet::new("window_items", json!({ "window": 1 }));
    assert!(matches!(
        dispatch(Some(&packet), &player),
        Err(DispatchError::NoConnection(_))
    ));
    assert!(!dispatch_or_log(Some(&packet), &player));
}

#[test]
fn tokens_and_identifiers_are_host_independent() {
    let ware = ItemStack::new("diamond_pickaxe", 1)
        .with_display_name("Shop Ware")
        .with_enchantment("efficiency", 4);

    let token = encode_item(&ware).unwrap();
    let restored: ItemStack = decode_item(&token).unwrap();
    assert!(ware.is_similar(&restored));

    assert!(is_uuid(&ActorId::new().to_string()));
    assert!(!is_uuid(&token));
}
